// scores.rs - Per-column score collection

/// Scores produced by one statistic run, one value per alignment column,
/// in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnScores {
    values: Vec<f64>,
}

impl ColumnScores {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(columns: usize) -> Self {
        Self {
            values: Vec::with_capacity(columns),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Arithmetic mean, `None` when no scores are present.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

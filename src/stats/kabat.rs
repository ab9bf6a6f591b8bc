// kabat.rs - Wu-Kabat variability statistic

use crate::data::Alignment;
use crate::error::Result;
use crate::stats::scores::ColumnScores;
use crate::stats::traits::Statistic;

/// Wu-Kabat variability coefficient per column:
/// `V(x) = k_x * N / n_max(x)` with `n_max` the occurrence count of the
/// column's most common symbol. Unweighted; gaps count as a symbol type.
/// A fully conserved column scores 1, variability grows from there.
pub struct KabatStatistic {
    scores: ColumnScores,
}

impl KabatStatistic {
    pub fn new() -> Self {
        Self {
            scores: ColumnScores::new(),
        }
    }
}

impl Default for KabatStatistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistic for KabatStatistic {
    fn name(&self) -> &str {
        "kabat"
    }

    fn description(&self) -> &str {
        "Wu-Kabat variability coefficient per column (1 = conserved)"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.scores.clear();

        let sequences = alignment.num_sequences();
        let columns = alignment.num_columns();
        self.scores = ColumnScores::with_capacity(columns);

        for x in 0..columns {
            let mut counts = [0usize; 256];
            let mut most_common = 0;
            for i in 0..sequences {
                let symbol = alignment.symbol(i, x) as usize;
                counts[symbol] += 1;
                most_common = most_common.max(counts[symbol]);
            }
            let types = alignment.column_type_count(x);
            self.scores
                .push(types as f64 * sequences as f64 / most_common as f64);
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

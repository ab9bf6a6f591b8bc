// gapstat.rs - Gap content statistic

use crate::data::{Alignment, GAP};
use crate::error::Result;
use crate::stats::scores::ColumnScores;
use crate::stats::traits::Statistic;

/// Unweighted fraction of gap symbols per column, in [0, 1].
pub struct GapStatistic {
    scores: ColumnScores,
}

impl GapStatistic {
    pub fn new() -> Self {
        Self {
            scores: ColumnScores::new(),
        }
    }
}

impl Default for GapStatistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistic for GapStatistic {
    fn name(&self) -> &str {
        "gap"
    }

    fn description(&self) -> &str {
        "Fraction of gap symbols per column"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.scores.clear();

        let sequences = alignment.num_sequences();
        let columns = alignment.num_columns();
        self.scores = ColumnScores::with_capacity(columns);

        for x in 0..columns {
            let gaps = (0..sequences)
                .filter(|&i| alignment.symbol(i, x) == GAP)
                .count();
            self.scores.push(gaps as f64 / sequences as f64);
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

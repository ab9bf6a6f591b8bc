// jensen.rs - Jensen-Shannon divergence statistic

use std::f64::consts::LN_2;

use crate::data::{Alignment, GAP};
use crate::error::Result;
use crate::stats::scores::ColumnScores;
use crate::stats::traits::Statistic;
use crate::stats::weights::sequence_weights;

/// Jensen-Shannon divergence between each column's weighted residue
/// distribution and the uniform background over the alignment's non-gap
/// alphabet, normalized by ln 2 into [0, 1].
///
/// Gaps are excluded and the remaining mass renormalized before the
/// comparison; columns made of gaps only score 0. Larger scores mean a
/// composition further from uniform, so conserved columns score high.
pub struct JensenShannonStatistic {
    weights: Vec<f64>,
    scores: ColumnScores,
}

impl JensenShannonStatistic {
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
            scores: ColumnScores::new(),
        }
    }
}

impl Default for JensenShannonStatistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistic for JensenShannonStatistic {
    fn name(&self) -> &str {
        "jensen"
    }

    fn description(&self) -> &str {
        "Jensen-Shannon divergence from the uniform residue background (1 = biased)"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.weights.clear();
        self.scores.clear();

        let sequences = alignment.num_sequences();
        let columns = alignment.num_columns();
        let alphabet = alignment.alphabet();
        let k = alphabet.len();

        let residues: Vec<usize> = (0..k).filter(|&a| alphabet[a] != GAP).collect();
        self.weights = sequence_weights(alignment);
        self.scores = ColumnScores::with_capacity(columns);

        if residues.is_empty() {
            for _ in 0..columns {
                self.scores.push(0.0);
            }
            return Ok(());
        }
        let background = 1.0 / residues.len() as f64;

        let mut column = vec![0.0; k];
        for x in 0..columns {
            column.fill(0.0);
            for (a, &symbol) in alphabet.iter().enumerate() {
                for i in 0..sequences {
                    if alignment.symbol(i, x) == symbol {
                        column[a] += self.weights[i];
                    }
                }
            }

            let residue_mass: f64 = residues.iter().map(|&a| column[a]).sum();
            if residue_mass <= 0.0 {
                self.scores.push(0.0);
                continue;
            }

            // JSD(p, q) = KL(p || m)/2 + KL(q || m)/2 with m the midpoint
            let mut divergence = 0.0;
            for &a in &residues {
                let p = column[a] / residue_mass;
                let midpoint = 0.5 * (p + background);
                if p > 0.0 {
                    divergence += 0.5 * p * (p / midpoint).ln();
                }
                divergence += 0.5 * background * (background / midpoint).ln();
            }
            self.scores.push((divergence / LN_2).clamp(0.0, 1.0));
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

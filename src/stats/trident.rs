// trident.rs - Valdar's three-factor conservation statistic

use crate::data::{Alignment, GAP};
use crate::error::Result;
use crate::stats::entropy_normalizer;
use crate::stats::scores::ColumnScores;
use crate::stats::similarity::SimilarityTable;
use crate::stats::traits::Statistic;
use crate::stats::weights::sequence_weights;

// Valdar's calibrated exponents for the three factors.
const ENTROPY_EXPONENT: f64 = 1.0;
const DIVERSITY_EXPONENT: f64 = 0.5;
const GAP_EXPONENT: f64 = 3.0;

/// Trident conservation score per column:
/// `(1 - t)^1 * (1 - r)^0.5 * (1 - g)^3`.
///
/// `t` is the same normalized weighted entropy as the wentropy statistic,
/// `r` the stereochemical diversity of the column (expected pairwise
/// residue distance under the gap-excluded weighted symbol distribution)
/// and `g` the weighted gap fraction. All three live in [0, 1], so a fully
/// conserved residue column scores 1 and a fully gapped column scores 0.
pub struct TridentStatistic {
    table: SimilarityTable,
    weights: Vec<f64>,
    probabilities: Vec<f64>,
    entropy: Vec<f64>,
    diversity: Vec<f64>,
    gaps: Vec<f64>,
    scores: ColumnScores,
}

impl TridentStatistic {
    pub fn new() -> Self {
        Self {
            table: SimilarityTable::new(),
            weights: Vec::new(),
            probabilities: Vec::new(),
            entropy: Vec::new(),
            diversity: Vec::new(),
            gaps: Vec::new(),
            scores: ColumnScores::new(),
        }
    }

    /// Row weights from the last `compute` call.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Per-column entropy factor t.
    pub fn entropy(&self) -> &[f64] {
        &self.entropy
    }

    /// Per-column stereochemical diversity factor r.
    pub fn diversity(&self) -> &[f64] {
        &self.diversity
    }

    /// Per-column weighted gap fraction g.
    pub fn gap_fractions(&self) -> &[f64] {
        &self.gaps
    }
}

impl Default for TridentStatistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistic for TridentStatistic {
    fn name(&self) -> &str {
        "trident"
    }

    fn description(&self) -> &str {
        "Valdar's trident score combining entropy, residue diversity and gaps (1 = conserved)"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.weights.clear();
        self.probabilities.clear();
        self.entropy.clear();
        self.diversity.clear();
        self.gaps.clear();
        self.scores.clear();

        let lambda = entropy_normalizer(alignment)?;
        let sequences = alignment.num_sequences();
        let columns = alignment.num_columns();
        let alphabet = alignment.alphabet();
        let k = alphabet.len();

        self.weights = sequence_weights(alignment);
        let total_weight: f64 = self.weights.iter().sum();

        let gap_index = alphabet.iter().position(|&symbol| symbol == GAP);
        let residues: Vec<usize> = (0..k).filter(|&a| alphabet[a] != GAP).collect();

        // pairwise distances between the alphabet's residue symbols
        let mut distances = vec![0.0; k * k];
        for &a in &residues {
            for &b in &residues {
                distances[a * k + b] = self.table.distance(alphabet[a], alphabet[b]);
            }
        }

        self.probabilities = vec![0.0; k * columns];
        self.scores = ColumnScores::with_capacity(columns);

        for x in 0..columns {
            let column = &mut self.probabilities[x * k..(x + 1) * k];
            for (a, &symbol) in alphabet.iter().enumerate() {
                for i in 0..sequences {
                    if alignment.symbol(i, x) == symbol {
                        column[a] += self.weights[i];
                    }
                }
            }

            let mut entropy = 0.0;
            if alignment.column_type_count(x) > 1 {
                for &p in column.iter() {
                    if p > 0.0 {
                        entropy -= p * p.ln();
                    }
                }
                entropy *= lambda;
            }
            let t = entropy.clamp(0.0, 1.0);

            let residue_mass: f64 = residues.iter().map(|&a| column[a]).sum();
            let mut diversity = 0.0;
            if residue_mass > 0.0 {
                for &a in &residues {
                    if column[a] <= 0.0 {
                        continue;
                    }
                    let q_a = column[a] / residue_mass;
                    for &b in &residues {
                        if column[b] > 0.0 {
                            diversity += q_a * (column[b] / residue_mass) * distances[a * k + b];
                        }
                    }
                }
            }
            let r = diversity.clamp(0.0, 1.0);

            let gap_mass = gap_index.map_or(0.0, |a| column[a]);
            let g = (gap_mass / total_weight).clamp(0.0, 1.0);

            self.entropy.push(t);
            self.diversity.push(r);
            self.gaps.push(g);
            self.scores.push(
                (1.0 - t).powf(ENTROPY_EXPONENT)
                    * (1.0 - r).powf(DIVERSITY_EXPONENT)
                    * (1.0 - g).powf(GAP_EXPONENT),
            );
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

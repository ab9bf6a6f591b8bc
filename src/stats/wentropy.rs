// wentropy.rs - Henikoff-weighted Shannon entropy statistic

use crate::data::Alignment;
use crate::error::Result;
use crate::stats::entropy_normalizer;
use crate::stats::scores::ColumnScores;
use crate::stats::traits::Statistic;
use crate::stats::weights::sequence_weights;

/// Weighted Shannon entropy per column, scaled to [0, 1].
///
/// Rows are weighted after Henikoff & Henikoff so redundant sequences do
/// not dominate the symbol distribution. Each column's entropy is scaled
/// by `1 / ln(min(K, N))`: 0 means full conservation, 1 maximal
/// variability. Columns with a single symbol score exactly 0.
pub struct WeightedEntropyStatistic {
    weights: Vec<f64>,
    probabilities: Vec<f64>,
    scores: ColumnScores,
}

impl WeightedEntropyStatistic {
    pub fn new() -> Self {
        Self {
            weights: Vec::new(),
            probabilities: Vec::new(),
            scores: ColumnScores::new(),
        }
    }

    /// Row weights from the last `compute` call.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Default for WeightedEntropyStatistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistic for WeightedEntropyStatistic {
    fn name(&self) -> &str {
        "wentropy"
    }

    fn description(&self) -> &str {
        "Henikoff-weighted Shannon entropy per column (0 = conserved, 1 = variable)"
    }

    fn compute(&mut self, alignment: &Alignment) -> Result<()> {
        self.weights.clear();
        self.probabilities.clear();
        self.scores.clear();

        let lambda = entropy_normalizer(alignment)?;
        let sequences = alignment.num_sequences();
        let columns = alignment.num_columns();
        let alphabet = alignment.alphabet();
        let k = alphabet.len();

        self.weights = sequence_weights(alignment);

        // one contiguous K x L probability table, column-major blocks
        self.probabilities = vec![0.0; k * columns];
        self.scores = ColumnScores::with_capacity(columns);

        for x in 0..columns {
            if alignment.column_type_count(x) == 1 {
                self.scores.push(0.0);
                continue;
            }

            let column = &mut self.probabilities[x * k..(x + 1) * k];
            for (a, &symbol) in alphabet.iter().enumerate() {
                for i in 0..sequences {
                    if alignment.symbol(i, x) == symbol {
                        column[a] += self.weights[i];
                    }
                }
            }

            let mut entropy = 0.0;
            for &p in column.iter() {
                if p > 0.0 {
                    entropy -= p * p.ln();
                }
            }
            self.scores.push(lambda * entropy);
        }
        Ok(())
    }

    fn scores(&self) -> &ColumnScores {
        &self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn alignment(rows: &[&str]) -> Alignment {
        let ids = (0..rows.len()).map(|i| format!("seq{}", i)).collect();
        let data = rows.iter().map(|r| r.as_bytes().to_vec()).collect();
        Alignment::new(ids, data).unwrap()
    }

    #[test]
    fn test_conserved_columns_score_exactly_zero() {
        let aln = alignment(&["AC", "AC", "AC"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        assert_eq!(statistic.scores().values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_two_rows_one_variable_column_scores_exactly_one() {
        let aln = alignment(&["A", "C"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        assert_eq!(statistic.scores().values(), &[1.0]);
    }

    #[test]
    fn test_uniform_column_is_maximally_variable() {
        let aln = alignment(&["A", "C", "G", "T"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        assert_relative_eq!(statistic.scores().values()[0], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mixed_columns() {
        let aln = alignment(&["AA", "AC"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        let scores = statistic.scores().values();
        assert_eq!(scores[0], 0.0);
        assert_relative_eq!(scores[1], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let aln = alignment(&["ACDEF", "ACD-F", "TCDEG", "AGDEF"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        for score in statistic.scores().iter() {
            assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let aln = alignment(&["ACDE", "AGD-", "ACTE"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        let first = statistic.scores().clone();
        statistic.compute(&aln).unwrap();
        assert_eq!(statistic.scores(), &first);
    }

    #[test]
    fn test_single_sequence_is_degenerate() {
        let aln = alignment(&["ACDE"]);
        let mut statistic = WeightedEntropyStatistic::new();
        match statistic.compute(&aln) {
            Err(Error::DegenerateAlignment { sequences, symbols }) => {
                assert_eq!(sequences, 1);
                assert_eq!(symbols, 4);
            }
            other => panic!("expected degenerate alignment, got {:?}", other),
        }
    }

    #[test]
    fn test_single_symbol_alignment_is_degenerate() {
        let aln = alignment(&["AA", "AA"]);
        let mut statistic = WeightedEntropyStatistic::new();
        assert!(matches!(
            statistic.compute(&aln),
            Err(Error::DegenerateAlignment { .. })
        ));
    }

    #[test]
    fn test_weights_are_retained() {
        let aln = alignment(&["A", "C"]);
        let mut statistic = WeightedEntropyStatistic::new();
        statistic.compute(&aln).unwrap();
        assert_eq!(statistic.weights(), &[0.5, 0.5]);
    }
}

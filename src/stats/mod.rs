// mod.rs - Statistics module root

pub mod gapstat;
pub mod jensen;
pub mod kabat;
pub mod registry;
pub mod scores;
pub mod similarity;
pub mod traits;
pub mod trident;
pub mod weights;
pub mod wentropy;

// Re-export main types for convenience
pub use gapstat::GapStatistic;
pub use jensen::JensenShannonStatistic;
pub use kabat::KabatStatistic;
pub use registry::StatisticRegistry;
pub use scores::ColumnScores;
pub use similarity::SimilarityTable;
pub use traits::Statistic;
pub use trident::TridentStatistic;
pub use weights::sequence_weights;
pub use wentropy::WeightedEntropyStatistic;

use crate::data::Alignment;
use crate::error::{Error, Result};

/// Entropy scale factor `1 / ln(min(K, N))` shared by the weighted
/// statistics. Undefined for alignments with fewer than two sequences or
/// fewer than two distinct symbols.
pub(crate) fn entropy_normalizer(alignment: &Alignment) -> Result<f64> {
    let symbols = alignment.alphabet().len();
    let sequences = alignment.num_sequences();
    let states = symbols.min(sequences);
    if states < 2 {
        return Err(Error::DegenerateAlignment { sequences, symbols });
    }
    Ok(1.0 / (states as f64).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn alignment(rows: &[&str]) -> Alignment {
        let ids = (0..rows.len()).map(|i| format!("seq{}", i)).collect();
        let data = rows.iter().map(|r| r.as_bytes().to_vec()).collect();
        Alignment::new(ids, data).unwrap()
    }

    #[test]
    fn test_entropy_normalizer_uses_the_smaller_dimension() {
        // 3 symbols over 2 sequences: normalizer is 1/ln(2)
        let aln = alignment(&["AC", "GC"]);
        assert_relative_eq!(entropy_normalizer(&aln).unwrap(), 1.0 / 2f64.ln());
    }

    #[test]
    fn test_entropy_normalizer_rejects_degenerate_input() {
        let aln = alignment(&["ACGT"]);
        assert!(matches!(
            entropy_normalizer(&aln),
            Err(Error::DegenerateAlignment {
                sequences: 1,
                symbols: 4
            })
        ));
    }

    #[test]
    fn test_every_builtin_computes_one_score_per_column() {
        let aln = alignment(&["ACDEF", "AC--F", "TCWEG", "AGDEF"]);
        let registry = StatisticRegistry::new();
        for name in registry.names() {
            let mut statistic = registry.create(name).unwrap();
            statistic.compute(&aln).unwrap();
            assert_eq!(
                statistic.scores().len(),
                aln.num_columns(),
                "wrong score count for '{}'",
                name
            );
            for score in statistic.scores().iter() {
                assert!(score.is_finite(), "non-finite score from '{}'", name);
            }
        }
    }
}

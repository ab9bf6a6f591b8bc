// traits.rs - Statistic trait definition

use crate::data::Alignment;
use crate::error::Result;
use crate::output::{self, OutputOptions};
use crate::stats::scores::ColumnScores;

/// A per-column alignment statistic.
///
/// Implementations fill their score state in `compute` and render it
/// through the shared output contract in `print`. Custom statistics plug
/// into the registry as trait objects; they decide how scores are
/// computed, never how they are written.
pub trait Statistic {
    /// Registry key for this statistic.
    fn name(&self) -> &str;

    /// One-line description shown by the statistic listing.
    fn description(&self) -> &str;

    /// Fill per-column scores from the alignment. Implementations reset
    /// any prior state on entry, so repeated calls give the same result.
    fn compute(&mut self, alignment: &Alignment) -> Result<()>;

    /// Scores retained from the last `compute` call.
    fn scores(&self) -> &ColumnScores;

    /// Write the retained scores to the configured destination: the global
    /// mean as a single line, or one line per column.
    fn print(&self, options: &OutputOptions) -> Result<()> {
        output::write_scores(&options.output, self.scores(), options.global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantStatistic {
        scores: ColumnScores,
    }

    impl Statistic for ConstantStatistic {
        fn name(&self) -> &str {
            "constant"
        }

        fn description(&self) -> &str {
            "same value for every column"
        }

        fn compute(&mut self, alignment: &Alignment) -> Result<()> {
            self.scores.clear();
            for _ in 0..alignment.num_columns() {
                self.scores.push(0.25);
            }
            Ok(())
        }

        fn scores(&self) -> &ColumnScores {
            &self.scores
        }
    }

    #[test]
    fn test_default_print_uses_shared_writer() {
        let aln = Alignment::new(
            vec!["a".to_string(), "b".to_string()],
            vec![b"AC".to_vec(), b"AG".to_vec()],
        )
        .unwrap();
        let mut statistic = ConstantStatistic {
            scores: ColumnScores::new(),
        };
        statistic.compute(&aln).unwrap();

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let options = OutputOptions::new(&path, false);
        statistic.print(&options).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.25\n0.25\n");

        let options = OutputOptions::new(&path, true);
        statistic.print(&options).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0.25\n");
    }
}

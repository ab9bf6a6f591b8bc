// similarity.rs - Residue distance table for stereochemical diversity

use bio::scores::blosum62::blosum62;

const RESIDUES: &[u8; 20] = b"ARNDCQEGHILKMFPSTWYV";

/// Pairwise distances between the 20 standard amino acids, derived from
/// BLOSUM62 scores `m` as `d(a, b) = 1 - max(0, m(a, b)) / sqrt(m(a, a) * m(b, b))`.
///
/// The normalization keeps every distance in [0, 1] with an exactly zero
/// diagonal, so a column of one residue type has zero diversity. Symbols
/// outside the residue set are treated as maximally distant unless they are
/// identical; gaps are handled by the caller and never reach the table.
pub struct SimilarityTable {
    distances: [[f64; 20]; 20],
}

impl SimilarityTable {
    pub fn new() -> Self {
        let mut distances = [[0.0; 20]; 20];
        for (i, &a) in RESIDUES.iter().enumerate() {
            for (j, &b) in RESIDUES.iter().enumerate() {
                let score = f64::from(blosum62(a, b));
                let self_a = f64::from(blosum62(a, a));
                let self_b = f64::from(blosum62(b, b));
                let similarity = score.max(0.0) / (self_a * self_b).sqrt();
                distances[i][j] = 1.0 - similarity;
            }
        }
        Self { distances }
    }

    /// Distance in [0, 1]: 0 for identical symbols, 1 for dissimilar or
    /// unknown ones.
    pub fn distance(&self, a: u8, b: u8) -> f64 {
        if a == b {
            return 0.0;
        }
        match (residue_index(a), residue_index(b)) {
            (Some(i), Some(j)) => self.distances[i][j],
            _ => 1.0,
        }
    }
}

impl Default for SimilarityTable {
    fn default() -> Self {
        Self::new()
    }
}

fn residue_index(symbol: u8) -> Option<usize> {
    RESIDUES.iter().position(|&r| r == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_residues_have_zero_distance() {
        let table = SimilarityTable::new();
        for &residue in RESIDUES {
            assert_eq!(table.distance(residue, residue), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let table = SimilarityTable::new();
        for &a in RESIDUES {
            for &b in RESIDUES {
                assert_eq!(table.distance(a, b), table.distance(b, a));
            }
        }
    }

    #[test]
    fn test_distances_are_bounded() {
        let table = SimilarityTable::new();
        for &a in RESIDUES {
            for &b in RESIDUES {
                let d = table.distance(a, b);
                assert!((0.0..=1.0).contains(&d), "{}-{} out of range: {}", a, b, d);
            }
        }
    }

    #[test]
    fn test_spot_values() {
        let table = SimilarityTable::new();
        // BLOSUM62: L/I score 2 on diagonals of 4 -> similarity 0.5
        assert_relative_eq!(table.distance(b'L', b'I'), 0.5);
        // A/W score is negative, clamped to maximal distance
        assert_relative_eq!(table.distance(b'A', b'W'), 1.0);
        // conservative substitution sits between the extremes
        let kr = table.distance(b'K', b'R');
        assert!(kr > 0.0 && kr < 1.0);
    }

    #[test]
    fn test_unknown_symbols_are_maximally_distant() {
        let table = SimilarityTable::new();
        assert_eq!(table.distance(b'B', b'A'), 1.0);
        assert_eq!(table.distance(b'A', b'J'), 1.0);
        assert_eq!(table.distance(b'X', b'X'), 0.0);
    }
}

// clustal.rs - Clustal alignment parser

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Parse Clustal content into (ids, rows). The header line, blank lines and
/// conservation rulers are skipped; block rows are `id chunk [count]` and
/// chunks accumulate in first-seen order.
pub fn parse(content: &str) -> Result<(Vec<String>, Vec<Vec<u8>>)> {
    let mut order: Vec<String> = Vec::new();
    let mut sequences: HashMap<String, Vec<u8>> = HashMap::new();

    for line in content.lines().skip(1) {
        let line = line.trim_end();
        if line.is_empty() || is_conservation_ruler(line) {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (id, chunk) = match (fields.next(), fields.next()) {
            (Some(id), Some(chunk)) => (id, chunk),
            _ => {
                return Err(Error::InvalidAlignment(format!(
                    "malformed Clustal line: '{}'",
                    line
                )))
            }
        };
        let entry = sequences.entry(id.to_string()).or_insert_with(|| {
            order.push(id.to_string());
            Vec::new()
        });
        entry.extend_from_slice(chunk.as_bytes());
    }

    let rows = order
        .iter()
        .filter_map(|id| sequences.remove(id))
        .collect();
    Ok((order, rows))
}

/// The annotation line under each block uses only `*`, `:`, `.` and spaces.
fn is_conservation_ruler(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '*' | ':' | '.' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks_with_ruler() {
        let content = "CLUSTAL W (1.82) multiple sequence alignment\n\n\
                       seq1   ACDE\nseq2   ACDF\n       ***:\n\n\
                       seq1   GHIK\nseq2   GHIK\n       ****\n";
        let (ids, rows) = parse(content).unwrap();
        assert_eq!(ids, vec!["seq1".to_string(), "seq2".to_string()]);
        assert_eq!(rows[0], b"ACDEGHIK".to_vec());
        assert_eq!(rows[1], b"ACDFGHIK".to_vec());
    }

    #[test]
    fn test_trailing_residue_counts_are_ignored() {
        let content = "CLUSTAL O(1.2.4)\n\nseq1 ACDE 4\nseq2 AC-E 3\n";
        let (_, rows) = parse(content).unwrap();
        assert_eq!(rows[0], b"ACDE".to_vec());
        assert_eq!(rows[1], b"AC-E".to_vec());
    }
}

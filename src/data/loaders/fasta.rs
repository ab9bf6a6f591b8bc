// fasta.rs - FASTA alignment parser

use bio::io::fasta;

use crate::error::{Error, Result};

/// Parse FASTA content into (ids, rows). Record order is kept.
pub fn parse(content: &str) -> Result<(Vec<String>, Vec<Vec<u8>>)> {
    let reader = fasta::Reader::new(content.as_bytes());

    let mut ids = Vec::new();
    let mut rows = Vec::new();
    for record_result in reader.records() {
        let record = record_result
            .map_err(|e| Error::InvalidAlignment(format!("invalid FASTA record: {}", e)))?;
        ids.push(record.id().to_string());
        rows.push(record.seq().to_vec());
    }
    Ok((ids, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_in_order() {
        let (ids, rows) = parse(">b desc text\nAC-E\n>a\nACDE\n").unwrap();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(rows, vec![b"AC-E".to_vec(), b"ACDE".to_vec()]);
    }

    #[test]
    fn test_multiline_sequences_are_joined() {
        let (_, rows) = parse(">a\nACD\nE-F\n").unwrap();
        assert_eq!(rows[0], b"ACDE-F".to_vec());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse("this is not fasta\n").is_err());
    }
}

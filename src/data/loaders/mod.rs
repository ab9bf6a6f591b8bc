// mod.rs - Alignment file loaders

pub mod clustal;
pub mod fasta;
pub mod stockholm;

use std::fs;
use std::path::Path;

use log::debug;

use crate::data::alignment::Alignment;
use crate::error::{Error, Result};

/// Load an alignment file, detecting the format from its content.
///
/// A `# STOCKHOLM` header selects Stockholm, a `CLUSTAL` first line selects
/// Clustal, anything else is read as FASTA.
pub fn load_alignment<P: AsRef<Path>>(path: P) -> Result<Alignment> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::AlignmentFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (format, parsed) = if content.trim_start().starts_with("# STOCKHOLM") {
        ("stockholm", stockholm::parse(&content))
    } else if first_line_is_clustal(&content) {
        ("clustal", clustal::parse(&content))
    } else {
        ("fasta", fasta::parse(&content))
    };
    debug!("reading '{}' as {}", path.display(), format);

    let (ids, rows) = parsed?;
    if ids.is_empty() {
        return Err(Error::InvalidAlignment(format!(
            "no sequences found in '{}'",
            path.display()
        )));
    }
    Alignment::new(ids, rows)
}

fn first_line_is_clustal(content: &str) -> bool {
    content
        .lines()
        .next()
        .map_or(false, |line| line.to_ascii_uppercase().contains("CLUSTAL"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_detects_fasta() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(&dir, "aln.fasta", ">a\nACDE\n>b\nACDF\n");
        let aln = load_alignment(&path).unwrap();
        assert_eq!(aln.num_sequences(), 2);
        assert_eq!(aln.num_columns(), 4);
    }

    #[test]
    fn test_detects_stockholm() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "aln.sto",
            "# STOCKHOLM 1.0\nseq1 ACDE\nseq2 ACDF\n//\n",
        );
        let aln = load_alignment(&path).unwrap();
        assert_eq!(aln.ids(), &["seq1".to_string(), "seq2".to_string()]);
    }

    #[test]
    fn test_detects_clustal() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "aln.aln",
            "CLUSTAL W (1.82) multiple sequence alignment\n\nseq1 ACDE\nseq2 ACDF\n     **: \n",
        );
        let aln = load_alignment(&path).unwrap();
        assert_eq!(aln.num_sequences(), 2);
    }

    #[test]
    fn test_missing_file() {
        let result = load_alignment("/nonexistent/alignment.fasta");
        assert!(matches!(result, Err(Error::AlignmentFile { .. })));
    }
}

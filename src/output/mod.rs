// mod.rs - Score output writing

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::stats::scores::ColumnScores;

/// Output settings consulted at print time. Diagnostic verbosity is not
/// carried here; it lives in the log level the binary configures.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Destination file for the scores.
    pub output: PathBuf,
    /// Write the single global mean instead of one line per column.
    pub global: bool,
}

impl OutputOptions {
    pub fn new<P: Into<PathBuf>>(output: P, global: bool) -> Self {
        Self {
            output: output.into(),
            global,
        }
    }
}

/// Write scores to `path`: the mean as a single line when `global` is set,
/// otherwise one line per column, in column order. Values use the shortest
/// decimal form that round-trips through f64. No header, no indices.
///
/// The destination is created (truncating any previous content) only after
/// the score state is known to be non-empty, so a failed run never leaves a
/// partial file behind.
pub fn write_scores(path: &Path, scores: &ColumnScores, global: bool) -> Result<()> {
    if scores.is_empty() {
        return Err(Error::EmptyScores);
    }

    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| output_error(path, e))?;
    let mut writer = BufWriter::new(file);

    if global {
        if let Some(mean) = scores.mean() {
            writeln!(writer, "{}", mean).map_err(|e| output_error(path, e))?;
        }
    } else {
        for value in scores.iter() {
            writeln!(writer, "{}", value).map_err(|e| output_error(path, e))?;
        }
    }

    writer.flush().map_err(|e| output_error(path, e))
}

/// Ensure parent directory exists before creating the file
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| output_error(path, e))?;
        }
    }
    Ok(())
}

fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::OutputFile {
        path: path.to_path_buf(),
        source,
    }
}

// error.rs - Crate error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading alignments, computing statistics and writing
/// score files. Library code returns these instead of exiting; the binary
/// decides what to do with them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to write output file '{path}': {source}")]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read alignment file '{path}': {source}")]
    AlignmentFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    #[error(
        "Degenerate alignment: need at least two sequences and two distinct symbols, \
         got {sequences} sequence(s) with {symbols} distinct symbol(s)"
    )]
    DegenerateAlignment { sequences: usize, symbols: usize },

    #[error("Unknown statistic '{0}'")]
    UnknownStatistic(String),

    #[error("No scores to write: compute produced no columns")]
    EmptyScores,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

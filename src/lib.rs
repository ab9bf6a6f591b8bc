// lib.rs - alnstat library root

//! # alnstat - Per-column conservation statistics for multiple sequence alignments
//!
//! This library computes per-column conservation and variability scores from a
//! multiple sequence alignment. Statistics are small plugins behind one trait:
//! they fill a per-column score vector and render it through a shared output
//! contract, either one score per column or a single global mean.
//!
//! ## Features
//!
//! - **Weighted statistics**: Henikoff sequence weighting behind entropy and
//!   trident scores, so redundant sequences do not dominate
//! - **Plugin system**: wentropy, trident, kabat, jensen and gap built in,
//!   custom statistics through the registry
//! - **Multiple formats**: FASTA, Clustal and Stockholm input detected from
//!   file content
//! - **Flexible filtering**: sequence selection with include/exclude regexes
//! - **Typed errors**: degenerate alignments and unknown statistics surface
//!   as errors instead of process exits
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use alnstat::prelude::*;
//!
//! // Load an alignment (format detected from content)
//! let alignment = load_alignment("alignment.fasta")?;
//!
//! // Create a statistic from the registry and run it
//! let registry = StatisticRegistry::new();
//! let mut statistic = registry.create("wentropy")?;
//! statistic.compute(&alignment)?;
//!
//! // One score per column, written as plain text
//! let options = OutputOptions::new("scores.txt", false);
//! statistic.print(&options)?;
//! # Ok::<(), alnstat::error::Error>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod data;
pub mod error;
pub mod output;
pub mod stats;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::data::{load_alignment, Alignment, GAP};
    pub use crate::error::{Error, Result};
    pub use crate::output::{write_scores, OutputOptions};
    pub use crate::stats::{ColumnScores, Statistic, StatisticRegistry};
    pub use crate::stats::{
        GapStatistic, JensenShannonStatistic, KabatStatistic, TridentStatistic,
        WeightedEntropyStatistic,
    };
}

// Re-export main types at the root level for convenience
pub use data::{load_alignment, Alignment};
pub use error::{Error, Result};
pub use output::OutputOptions;
pub use stats::{ColumnScores, Statistic, StatisticRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "alnstat v{} - Per-column conservation statistics for multiple sequence alignments",
        VERSION
    )
}

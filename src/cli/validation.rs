// validation.rs - Input validation utilities

use std::path::PathBuf;

use regex::Regex;

use crate::cli::args::Args;
use crate::error::{Error, Result};
use crate::stats::StatisticRegistry;

/// Validated and resolved run parameters.
///
/// `output` is `None` only for dry runs, which never write anything.
pub struct ValidationResult {
    pub alignment: PathBuf,
    pub output: Option<PathBuf>,
    pub include_regex: Option<Regex>,
    pub exclude_regex: Option<Regex>,
}

/// Validate all command line arguments before any file is opened for
/// writing. The registry is passed in by the caller so the statistic name
/// is checked against whatever is actually registered.
pub fn validate_args(args: &Args, registry: &StatisticRegistry) -> Result<ValidationResult> {
    // Validate statistic name
    if !registry.contains(&args.statistic) {
        return Err(Error::UnknownStatistic(args.statistic.clone()));
    }

    // Required paths for a computing run
    let alignment = match &args.alignment {
        Some(path) => PathBuf::from(path),
        None => {
            return Err(Error::Config(
                "--alignment is required (or set 'alignment' in the config file)".to_string(),
            ));
        }
    };
    let output = match &args.output {
        Some(path) => Some(PathBuf::from(path)),
        None if args.dry_run => None,
        None => {
            return Err(Error::Config(
                "--output is required (or set 'output' in the config file)".to_string(),
            ));
        }
    };

    // Compile regex patterns
    let include_regex = match &args.include_seqs {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| Error::Config(format!("Invalid include_seqs regex: {}", e)))?,
        ),
        None => None,
    };

    let exclude_regex = match &args.exclude_seqs {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| Error::Config(format!("Invalid exclude_seqs regex: {}", e)))?,
        ),
        None => None,
    };

    Ok(ValidationResult {
        alignment,
        output,
        include_regex,
        exclude_regex,
    })
}

// config.rs - Configuration file support

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub alignment: Option<String>,
    pub output: Option<String>,

    // Core settings
    pub statistic: Option<String>,
    pub global: Option<bool>,
    pub verbose: Option<bool>,

    // Sequence filtering
    pub include_seqs: Option<String>,
    pub exclude_seqs: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# alnstat.toml - Configuration file for alnstat
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Input alignment file (FASTA, Clustal or Stockholm)
alignment = "/path/to/alignment.fasta"

# Output file for the computed scores
output = "scores.txt"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Statistic to compute: wentropy, trident, kabat, jensen, gap
statistic = "wentropy"

# Write a single global mean instead of one score per column
global = false

# Enable debug-level diagnostics
verbose = false

# =============================================================================
# SEQUENCE FILTERING
# =============================================================================

# Include only sequences matching regex pattern
# include_seqs = "^human_.*"

# Exclude sequences matching regex pattern
# exclude_seqs = "fragment"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_config_parses() {
        let sample = Config::generate_sample();
        let config: Config = toml::from_str(&sample).unwrap();
        assert_eq!(config.statistic.as_deref(), Some("wentropy"));
        assert_eq!(config.global, Some(false));
        assert_eq!(config.include_seqs, None);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("alnstat.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "statistic = \"trident\"\nglobal = true").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.statistic.as_deref(), Some("trident"));
        assert_eq!(config.global, Some(true));
        assert_eq!(config.alignment, None);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = Config::from_file("/nonexistent/alnstat.toml");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "statistic = [unterminated").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Config(_))));
    }
}

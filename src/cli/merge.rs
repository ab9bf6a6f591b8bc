// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.alignment.is_none() {
            self.alignment = config.alignment;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.statistic == "wentropy" && config.statistic.is_some() {
            self.statistic = config.statistic.unwrap();
        }

        // Sequence filtering
        if self.include_seqs.is_none() {
            self.include_seqs = config.include_seqs;
        }
        if self.exclude_seqs.is_none() {
            self.exclude_seqs = config.exclude_seqs;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.global && config.global.unwrap_or(false) {
            self.global = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            alignment: None,
            output: None,
            statistic: "wentropy".to_string(),
            global: false,
            verbose: false,
            include_seqs: None,
            exclude_seqs: None,
            dry_run: false,
            list_statistics: false,
            config: None,
            generate_config: false,
        }
    }

    #[test]
    fn test_config_fills_unset_values() {
        let config = Config {
            alignment: Some("aln.fasta".to_string()),
            output: Some("scores.txt".to_string()),
            statistic: Some("trident".to_string()),
            global: Some(true),
            ..Config::default()
        };
        let merged = base_args().merge_with_config(config);
        assert_eq!(merged.alignment.as_deref(), Some("aln.fasta"));
        assert_eq!(merged.output.as_deref(), Some("scores.txt"));
        assert_eq!(merged.statistic, "trident");
        assert!(merged.global);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let mut args = base_args();
        args.alignment = Some("cli.fasta".to_string());
        args.statistic = "kabat".to_string();

        let config = Config {
            alignment: Some("config.fasta".to_string()),
            statistic: Some("trident".to_string()),
            ..Config::default()
        };
        let merged = args.merge_with_config(config);
        assert_eq!(merged.alignment.as_deref(), Some("cli.fasta"));
        assert_eq!(merged.statistic, "kabat");
    }

    #[test]
    fn test_config_cannot_unset_cli_flags() {
        let mut args = base_args();
        args.global = true;
        let config = Config {
            global: Some(false),
            ..Config::default()
        };
        let merged = args.merge_with_config(config);
        assert!(merged.global);
    }
}

// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Clone)]
/// alnstat - Per-column conservation statistics for multiple sequence alignments
pub struct Args {
    /// input alignment file (FASTA, Clustal or Stockholm)
    #[argh(option)]
    pub alignment: Option<String>,

    /// output file for the computed scores
    #[argh(option)]
    pub output: Option<String>,

    /// statistic to compute (default: wentropy)
    #[argh(option, default = "String::from(\"wentropy\")")]
    pub statistic: String,

    /// write a single global mean instead of one score per column
    #[argh(switch)]
    pub global: bool,

    /// enable debug-level diagnostics (row weights, parser details)
    #[argh(switch)]
    pub verbose: bool,

    /// include only sequences whose id matches regex pattern
    #[argh(option)]
    pub include_seqs: Option<String>,

    /// exclude sequences whose id matches regex pattern
    #[argh(option)]
    pub exclude_seqs: Option<String>,

    /// validate inputs and report dimensions without writing scores
    #[argh(switch)]
    pub dry_run: bool,

    /// list available statistics and exit
    #[argh(switch)]
    pub list_statistics: bool,

    /// load settings from TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate a sample configuration file to stdout and exit
    #[argh(switch)]
    pub generate_config: bool,
}

// main.rs - CLI entry point

use std::time::Instant;

use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use alnstat::cli::Config;
use alnstat::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let config_path = args.config.clone();
    if let Some(path) = &config_path {
        args = args.with_config_file(path)?;
    }

    // Logging is initialized after the config merge so `verbose = true` in
    // the config file is honored.
    init_logging(args.verbose);
    if let Some(path) = &config_path {
        debug!("configuration loaded from {}", path);
    }

    let registry = StatisticRegistry::new();

    if args.list_statistics {
        for (name, description) in registry.list() {
            println!("{}: {}", name, description);
        }
        return Ok(());
    }

    if !registry.contains(&args.statistic) {
        eprintln!("Available statistics:");
        for (name, description) in registry.list() {
            eprintln!("  - {}: {}", name, description);
        }
        return Err(Error::UnknownStatistic(args.statistic.clone()));
    }

    // Validate all arguments
    let validation = validate_args(&args, &registry)?;

    let total_start = Instant::now();

    let mut alignment = load_alignment(&validation.alignment)?;
    alignment.retain_sequences(
        validation.include_regex.as_ref(),
        validation.exclude_regex.as_ref(),
    )?;
    info!(
        "alignment: {} sequences x {} columns, {} distinct symbols",
        alignment.num_sequences(),
        alignment.num_columns(),
        alignment.alphabet().len()
    );

    if args.dry_run {
        info!("dry run completed, no scores computed");
        return Ok(());
    }

    let output = validation
        .output
        .ok_or_else(|| Error::Config("--output is required".to_string()))?;

    let mut statistic = registry.create(&args.statistic)?;
    info!("computing statistic '{}'", statistic.name());
    statistic.compute(&alignment)?;

    let options = OutputOptions::new(&output, args.global);
    statistic.print(&options)?;

    if args.global {
        info!("wrote global mean to {}", output.display());
    } else {
        info!(
            "wrote {} column scores to {}",
            statistic.scores().len(),
            output.display()
        );
    }

    let total_elapsed = total_start.elapsed();
    info!("total execution time: {:.2}s", total_elapsed.as_secs_f64());

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");
}

//! Front matter injector CLI

use anyhow::Result;
use blogfm::config::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod theme;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if !cli.root.is_dir() {
        let err = anyhow::anyhow!("Not a directory: {}", cli.root.display());
        blogfm::errors::print_error_with_suggestion(
            "Failed to open content root",
            &err,
            "Pass an existing directory with --root",
        );
        std::process::exit(1);
    }

    let config = match Config::load(&cli.root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            blogfm::errors::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                "Check the TOML syntax and field names of the configuration file",
            );
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Inject { dry_run } => inject_tree(&config, &cli.root, dry_run),
        Commands::Preview { path } => preview_file(&config, &cli.root, &path),
    };

    if let Err(e) = result {
        blogfm::errors::print_error("Command failed", &e);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

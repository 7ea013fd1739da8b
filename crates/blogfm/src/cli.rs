//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogfm")]
#[command(version, about = "Jekyll Front Matter Injector", long_about = None)]
#[command(after_help = "Use 'blogfm <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root of the content tree (defaults to the current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Configuration file (defaults to <root>/.blogfm.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add front matter to every eligible post under the root
    #[command(visible_alias = "run")]
    Inject {
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the front matter that would be generated for one file
    Preview {
        /// Path to a markdown file
        path: PathBuf,
    },
}

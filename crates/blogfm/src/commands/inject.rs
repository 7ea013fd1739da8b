//! Inject command implementation

use crate::theme;
use anyhow::Result;
use blogfm::config::Config;
use blogfm::inject::{Event, Injector, Outcome, Summary};
use colored::*;
use std::path::Path;

/// Add front matter to every eligible post under `root`
pub fn inject_tree(config: &Config, root: &Path, dry_run: bool) -> Result<()> {
    let banner = if dry_run {
        "Jekyll Front Matter Injector (dry run)"
    } else {
        "Jekyll Front Matter Injector"
    };
    println!("{}", "=".repeat(60));
    println!("{}", banner.bold());
    println!("{}\n", "=".repeat(60));

    let injector = Injector::new(config, root).dry_run(dry_run);
    let summary = injector.run(|event| report(event, dry_run));

    print_summary(&summary, dry_run);
    Ok(())
}

fn report(event: Event<'_>, dry_run: bool) {
    match event {
        Event::Handled { path, outcome: Outcome::Processed(fm) } => {
            let verb = if dry_run { "Would add" } else { "Added" };
            println!(
                "{} {}: {} {}",
                theme::success(theme::success_symbol()),
                verb,
                path.display(),
                theme::categories(&fm.categories)
            );
        }
        Event::Handled { path, outcome: Outcome::Skipped } => {
            println!(
                "{} {}",
                theme::info(theme::info_symbol()),
                theme::info(&format!("Skipped (front matter present): {}", path.display()))
            );
        }
        Event::Failed { path, error } => {
            println!(
                "{} {}",
                theme::error(theme::error_symbol()),
                theme::error(&format!("Error ({}): {}", path.display(), root_cause(error)))
            );
        }
    }
}

fn root_cause(error: &anyhow::Error) -> String {
    error.chain().last().map(|e| e.to_string()).unwrap_or_default()
}

fn print_summary(summary: &Summary, dry_run: bool) {
    let processed_label = if dry_run { "Would process" } else { "Processed" };

    println!();
    println!("{}", "=".repeat(60));
    println!("{}: {}", processed_label, summary.processed.to_string().green());
    println!("Skipped: {}", summary.skipped.to_string().cyan());
    println!("Errors: {}", summary.errors.to_string().red());
    println!("{}", "=".repeat(60));
}

//! Preview command implementation

use crate::theme;
use anyhow::{Context, Result};
use blogfm::config::Config;
use blogfm::header::has_front_matter;
use blogfm::inject::Injector;
use blogfm::walk::is_eligible;
use colored::*;
use std::fs;
use std::path::Path;

/// Print the front matter that `inject` would add to a single file
pub fn preview_file(config: &Config, root: &Path, path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    if !is_eligible(path, config) {
        println!(
            "{} {} is not an eligible post (extension '{}', or excluded by name)",
            theme::info(theme::info_symbol()),
            path.display(),
            config.extension
        );
    }

    let content = fs::read_to_string(path).context("Failed to read file")?;
    if has_front_matter(&content) {
        println!(
            "{} Front matter already present in {}",
            theme::success(theme::success_symbol()),
            path.display()
        );
        return Ok(());
    }

    let front_matter = Injector::new(config, root).front_matter_for(path)?;
    println!("{}\n", format!("Front matter for {}:", path.display()).bold());
    print!("{}", front_matter.render());
    Ok(())
}

//! Content tree traversal

use crate::config::{Config, Exclusions};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lazily yield every file under `root`.
///
/// Excluded and hidden directories are pruned before descent, so nothing
/// beneath them is ever visited. The root itself is always entered.
pub fn traverse<'a>(
    root: &Path,
    exclusions: &'a Exclusions,
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_pruned(entry, exclusions))
        .filter_map(|entry| match entry {
            Ok(entry) if is_file(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
}

/// Regular files and symlinks that resolve to one
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_pruned(entry: &DirEntry, exclusions: &Exclusions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    let pruned = exclusions.is_excluded_dir(&name);
    if pruned {
        tracing::debug!(dir = %entry.path().display(), "pruning excluded directory");
    }
    pruned
}

/// A file is a candidate post when its name carries the configured
/// extension and is not on the exclusion list
pub fn is_eligible(path: &Path, config: &Config) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    name.ends_with(&config.extension) && !config.exclusions.is_excluded_file(name)
}

//! Front matter injection over a content tree

use crate::config::Config;
use crate::errors::InjectError;
use crate::header::{derive_date, derive_title, has_front_matter, FrontMatter};
use crate::walk::{is_eligible, traverse};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of handling a single eligible file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Header was prepended (or would be, in a dry run)
    Processed(FrontMatter),
    /// File already starts with front matter
    Skipped,
}

/// Counts accumulated over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.errors
    }
}

/// Per-file event reported while a run is in progress
#[derive(Debug)]
pub enum Event<'a> {
    Handled { path: &'a Path, outcome: &'a Outcome },
    Failed { path: &'a Path, error: &'a anyhow::Error },
}

/// Adds front matter to every eligible file beneath a root
pub struct Injector<'a> {
    config: &'a Config,
    root: PathBuf,
    dry_run: bool,
}

impl<'a> Injector<'a> {
    pub fn new(config: &'a Config, root: impl AsRef<Path>) -> Self {
        Self { config, root: root.as_ref().to_path_buf(), dry_run: false }
    }

    /// Compute outcomes without touching any file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and inject every eligible file.
    ///
    /// Per-file and per-directory failures are handed to `on_event`, counted,
    /// and do not stop the walk.
    pub fn run<F>(&self, mut on_event: F) -> Summary
    where
        F: FnMut(Event<'_>),
    {
        let mut summary = Summary::default();
        tracing::info!(
            root = %self.root.display(),
            dry_run = self.dry_run,
            "injecting front matter"
        );

        for entry in traverse(&self.root, &self.config.exclusions) {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                    tracing::warn!(path = %path.display(), error = %e, "traversal error");
                    let error = anyhow::Error::new(e);
                    on_event(Event::Failed { path: &path, error: &error });
                    summary.errors += 1;
                    continue;
                }
            };

            if !is_eligible(&path, self.config) {
                continue;
            }

            match self.inject_file(&path) {
                Ok(outcome) => {
                    match outcome {
                        Outcome::Processed(_) => summary.processed += 1,
                        Outcome::Skipped => summary.skipped += 1,
                    }
                    on_event(Event::Handled { path: &path, outcome: &outcome });
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to inject front matter"
                    );
                    let error = anyhow::Error::new(e);
                    on_event(Event::Failed { path: &path, error: &error });
                    summary.errors += 1;
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            skipped = summary.skipped,
            errors = summary.errors,
            "run complete"
        );
        summary
    }

    /// Ensure one file starts with front matter
    pub fn inject_file(&self, path: &Path) -> Result<Outcome, InjectError> {
        let content = fs::read_to_string(path)
            .map_err(|source| InjectError::Read { path: path.to_path_buf(), source })?;

        if has_front_matter(&content) {
            tracing::debug!(path = %path.display(), "front matter already present");
            return Ok(Outcome::Skipped);
        }

        let front_matter = self.front_matter_for(path)?;
        tracing::debug!(
            path = %path.display(),
            title = %front_matter.title,
            date = %front_matter.date,
            categories = ?front_matter.categories,
            "derived front matter"
        );

        if !self.dry_run {
            let updated = front_matter.render() + &content;
            write_atomic(path, &updated)
                .map_err(|source| InjectError::Write { path: path.to_path_buf(), source })?;
        }

        Ok(Outcome::Processed(front_matter))
    }

    /// Header that would be generated for `path`
    pub fn front_matter_for(&self, path: &Path) -> Result<FrontMatter, InjectError> {
        let date = derive_date(path)
            .map_err(|source| InjectError::Read { path: path.to_path_buf(), source })?;

        Ok(FrontMatter {
            layout: self.config.layout.clone(),
            title: derive_title(path),
            date,
            categories: self.config.categories.derive(path, Some(self.root.as_path())),
        })
    }
}

/// Write to a sibling temp file, then rename over the target.
///
/// A symlinked post has its target rewritten and the link left in place.
/// Read-only files are refused rather than replaced.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let target = if fs::symlink_metadata(path)?.file_type().is_symlink() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };

    let permissions = fs::metadata(&target)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"));
    }

    let file_name = target.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let temp_file = target.with_file_name(format!(".{}.blogfm.tmp", file_name));

    if let Err(e) = fs::write(&temp_file, content) {
        let _ = fs::remove_file(&temp_file);
        return Err(e);
    }

    // Keep the original file's mode on the replacement
    if let Err(e) = fs::set_permissions(&temp_file, permissions) {
        tracing::warn!(
            path = %target.display(),
            error = %e,
            "could not copy file mode to rewritten post"
        );
    }

    fs::rename(&temp_file, &target).inspect_err(|_| {
        let _ = fs::remove_file(&temp_file);
    })
}

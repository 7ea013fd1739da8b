use crate::category::{CategoryMap, CategoryRule, FallbackRule};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Name of the per-tree configuration file looked up under the root
pub const CONFIG_FILE_NAME: &str = ".blogfm.toml";

/// Directory and file names skipped during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusions {
    pub dirs: BTreeSet<String>,
    pub files: BTreeSet<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        let dirs =
            ["archive", "node_modules", ".git", "resources", "snippets", "docs", "job_specs"];
        let files = [
            "README.md",
            "readme.md",
            "favorite.md",
            "blog_migration_guide.md",
            "jekyll_setup_guide.md",
            "_sample.md",
            "_post_template.md",
        ];

        Self {
            dirs: dirs.iter().map(|s| s.to_string()).collect(),
            files: files.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Exclusions {
    /// Directories are pruned when listed or hidden
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.dirs.contains(name) || name.starts_with('.')
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }
}

/// Injector configuration with layered defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Suffix that marks a file as a post
    pub extension: String,

    /// Value written to the `layout` field
    pub layout: String,

    pub exclusions: Exclusions,

    pub categories: CategoryMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: ".md".to_string(),
            layout: "post".to_string(),
            exclusions: Exclusions::default(),
            categories: CategoryMap::default(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// An explicit `config_path` must exist. Otherwise `<root>/.blogfm.toml`
    /// is used when present, and the built-in defaults when not.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let path = match config_path {
            Some(p) => Some(p.to_path_buf()),
            None => Some(root.join(CONFIG_FILE_NAME)).filter(|p| p.exists()),
        };

        if let Some(path) = path {
            let file_config = Self::load_from_file(&path)?;
            config.merge(file_config);
            tracing::debug!(path = %path.display(), "loaded configuration file");
        }

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.extension {
            self.extension = val;
        }
        if let Some(val) = other.layout {
            self.layout = val;
        }
        if let Some(val) = other.exclude_dirs {
            self.exclusions.dirs = val.into_iter().collect();
        }
        if let Some(val) = other.exclude_files {
            self.exclusions.files = val.into_iter().collect();
        }
        if let Some(val) = other.categories {
            self.categories.rules = val;
        }
        if let Some(val) = other.fallbacks {
            self.categories.fallbacks = val;
        }
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    extension: Option<String>,
    layout: Option<String>,
    exclude_dirs: Option<Vec<String>>,
    exclude_files: Option<Vec<String>>,
    categories: Option<Vec<CategoryRule>>,
    fallbacks: Option<Vec<FallbackRule>>,
}

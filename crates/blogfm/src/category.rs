//! Category derivation from a post's directory location
//!
//! Categories are resolved against an ordered list of path-prefix rules.
//! The first rule (in declaration order) whose prefix occurs anywhere in the
//! parent directory string wins. If none match, a second list of coarser
//! fallback rules is consulted; each fallback may refine its result by a
//! keyword found elsewhere in the path.

use serde::Deserialize;
use std::path::Path;

/// A path prefix mapped to an ordered list of category labels
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    pub prefix: String,
    pub categories: Vec<String>,
}

impl CategoryRule {
    pub fn new(prefix: &str, categories: &[&str]) -> Self {
        Self { prefix: prefix.to_string(), categories: to_labels(categories) }
    }
}

/// A keyword that narrows a fallback match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Refinement {
    pub keyword: String,
    pub categories: Vec<String>,
}

/// Coarse prefix check used when no [`CategoryRule`] matched
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FallbackRule {
    pub prefix: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub refinements: Vec<Refinement>,
}

impl FallbackRule {
    pub fn new(prefix: &str, categories: &[&str]) -> Self {
        Self {
            prefix: prefix.to_string(),
            categories: to_labels(categories),
            refinements: Vec::new(),
        }
    }

    pub fn refine(mut self, keyword: &str, categories: &[&str]) -> Self {
        self.refinements
            .push(Refinement { keyword: keyword.to_string(), categories: to_labels(categories) });
        self
    }

    fn resolve(&self, dir: &str) -> Vec<String> {
        self.refinements
            .iter()
            .find(|r| dir.contains(&r.keyword))
            .map(|r| r.categories.clone())
            .unwrap_or_else(|| self.categories.clone())
    }
}

/// Ordered category lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    pub rules: Vec<CategoryRule>,
    pub fallbacks: Vec<FallbackRule>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        // Deeper prefixes come first so the first substring match is also the
        // most specific one.
        let rules = vec![
            CategoryRule::new("posts/dev/python/django", &["dev", "python", "django"]),
            CategoryRule::new("posts/dev/python/pydantic", &["dev", "python", "pydantic"]),
            CategoryRule::new("posts/dev/python/sqlalchemy", &["dev", "python", "sqlalchemy"]),
            CategoryRule::new("posts/dev/python/unittest", &["dev", "python", "unittest"]),
            CategoryRule::new("posts/dev/python/mywork", &["dev", "python", "mywork"]),
            CategoryRule::new("posts/dev/python", &["dev", "python"]),
            CategoryRule::new("posts/dev/ai", &["dev", "ai"]),
            CategoryRule::new("posts/dev/aws", &["dev", "aws"]),
            CategoryRule::new("posts/dev/backend", &["dev", "backend"]),
            CategoryRule::new("posts/dev/devops", &["dev", "devops"]),
            CategoryRule::new("posts/dev/etc", &["dev", "etc"]),
            CategoryRule::new("posts/dev/frontend", &["dev", "frontend"]),
            CategoryRule::new("posts/dev/git", &["dev", "git"]),
            CategoryRule::new("posts/dev/history", &["dev", "history"]),
            CategoryRule::new("posts/dev/storage", &["dev", "storage"]),
            CategoryRule::new("posts/invest", &["invest"]),
            CategoryRule::new("posts/travel/thai", &["travel", "thai"]),
            CategoryRule::new("posts/travel/vietnam", &["travel", "vietnam"]),
            CategoryRule::new("posts/travel", &["travel"]),
            CategoryRule::new("posts/etc", &["etc"]),
        ];

        let fallbacks = vec![
            FallbackRule::new("posts/dev/python", &["dev", "python"])
                .refine("django", &["dev", "python", "django"])
                .refine("pydantic", &["dev", "python", "pydantic"])
                .refine("sqlalchemy", &["dev", "python", "sqlalchemy"]),
            FallbackRule::new("posts/dev", &["dev"]),
            FallbackRule::new("posts/invest", &["invest"]),
            FallbackRule::new("posts/travel", &["travel"]),
            FallbackRule::new("posts/etc", &["etc"]),
        ];

        Self { rules, fallbacks }
    }
}

impl CategoryMap {
    /// Categories for a normalized parent directory string
    pub fn lookup(&self, dir: &str) -> Vec<String> {
        if let Some(rule) = self.rules.iter().find(|r| dir.contains(&r.prefix)) {
            return rule.categories.clone();
        }

        self.fallbacks
            .iter()
            .find(|f| dir.contains(&f.prefix))
            .map(|f| f.resolve(dir))
            .unwrap_or_default()
    }

    /// Categories for a file, matched on its parent directory.
    ///
    /// When `root` is given and contains the file, the directory is taken
    /// relative to it, so a checkout location like `/srv/posts/etc/blog`
    /// cannot leak into the match.
    pub fn derive(&self, path: &Path, root: Option<&Path>) -> Vec<String> {
        let relative = root.and_then(|r| path.strip_prefix(r).ok()).unwrap_or(path);
        let parent = relative.parent().unwrap_or_else(|| Path::new(""));
        let dir = normalize_separators(&parent.to_string_lossy());
        self.lookup(&dir)
    }
}

/// Convert Windows separators to forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn to_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

//! Jekyll front matter injection for markdown blog posts
//!
//! This library walks a content tree, finds markdown posts that lack a
//! front matter block, and prepends one derived from the file name,
//! modification time, and directory location.

pub mod category;
pub mod config;
pub mod errors;
pub mod header;
pub mod inject;
pub mod walk;

pub use category::{CategoryMap, CategoryRule, FallbackRule};
pub use config::{Config, Exclusions};
pub use errors::InjectError;
pub use header::{derive_title, has_front_matter, FrontMatter};
pub use inject::{Event, Injector, Outcome, Summary};

/// Re-export common error types
pub use anyhow::{Error, Result};

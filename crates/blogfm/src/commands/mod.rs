//! Command implementations

pub mod inject;
pub mod preview;

pub use inject::inject_tree;
pub use preview::preview_file;

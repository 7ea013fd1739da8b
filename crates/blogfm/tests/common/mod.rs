// Test infrastructure and utilities for blogfm tests

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway content tree
pub struct ContentTree {
    pub temp: TempDir,
}

impl ContentTree {
    pub fn new() -> Self {
        Self { temp: TempDir::new().unwrap() }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the root, creating parent directories
    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).unwrap()
    }

    /// `blogfm --root <tree>` with colors disabled
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("blogfm");
        cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").arg("--root").arg(self.root());
        cmd
    }
}

impl Default for ContentTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Split generated content into (front matter yaml, body)
pub fn split_front_matter(content: &str) -> (String, String) {
    let rest = content.strip_prefix("---\n").expect("content should open with a delimiter");
    let end = rest.find("\n---\n").expect("front matter should be closed");
    let yaml = rest[..end].to_string();
    let body = rest[end + "\n---\n".len()..].to_string();
    (yaml, body)
}

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{split_front_matter, ContentTree};
use predicates::prelude::*;
use serde_yaml::Value;

#[test]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("blogfm");
    cmd.arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("Jekyll Front Matter Injector"));
}

#[test]
fn test_inject_adds_valid_front_matter() {
    let tree = ContentTree::new();
    let original = "# Django ORM\n\nNotes on querysets.\n";
    tree.write("posts/dev/python/django/my_first_post.md", original);

    tree.cmd()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed: 1"))
        .stdout(predicate::str::contains("Skipped: 0"))
        .stdout(predicate::str::contains("Errors: 0"));

    let content = tree.read("posts/dev/python/django/my_first_post.md");
    let (yaml, body) = split_front_matter(&content);
    assert_eq!(body, format!("\n{}", original));

    let header: Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(header["layout"], Value::from("post"));
    assert_eq!(header["title"], Value::from("My First Post"));
    let expected: Value = serde_yaml::from_str("[dev, python, django]").unwrap();
    assert_eq!(header["categories"], expected);

    let date = header["date"].as_str().unwrap();
    assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_inject_uncategorized_post() {
    let tree = ContentTree::new();
    tree.write("posts/unknown/z.md", "body");

    tree.cmd().arg("inject").assert().success();

    let content = tree.read("posts/unknown/z.md");
    assert!(content.contains("title: \"Z\"\n"));
    assert!(content.contains("categories: []\n"));
    assert!(content.ends_with("---\n\nbody"));
}

#[test]
fn test_existing_front_matter_is_byte_identical() {
    let tree = ContentTree::new();
    let original = "\n---\ntitle: Kept\n---\n\nbody  \r\n";
    tree.write("posts/etc/kept.md", original);

    tree.cmd().arg("inject").assert().success().stdout(predicate::str::contains("Skipped: 1"));

    assert_eq!(tree.read("posts/etc/kept.md"), original);
}

#[test]
fn test_second_run_is_all_skips() {
    let tree = ContentTree::new();
    tree.write("posts/etc/y.md", "one");
    tree.write("posts/travel/vietnam/hanoi.md", "two");

    tree.cmd().arg("inject").assert().success().stdout(predicate::str::contains("Processed: 2"));
    let first_y = tree.read("posts/etc/y.md");
    let first_hanoi = tree.read("posts/travel/vietnam/hanoi.md");

    tree.cmd()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed: 0"))
        .stdout(predicate::str::contains("Skipped: 2"));

    assert_eq!(tree.read("posts/etc/y.md"), first_y);
    assert_eq!(tree.read("posts/travel/vietnam/hanoi.md"), first_hanoi);
}

#[test]
fn test_excluded_directories_are_untouched() {
    let tree = ContentTree::new();
    tree.write("archive/old_post.md", "old");
    tree.write("posts/dev/archive/older.md", "older");
    tree.write(".github/notes.md", "hidden");
    tree.write("README.md", "readme");
    tree.write("posts/etc/new.md", "new");

    tree.cmd().arg("inject").assert().success().stdout(predicate::str::contains("Processed: 1"));

    assert_eq!(tree.read("archive/old_post.md"), "old");
    assert_eq!(tree.read("posts/dev/archive/older.md"), "older");
    assert_eq!(tree.read(".github/notes.md"), "hidden");
    assert_eq!(tree.read("README.md"), "readme");
    assert!(tree.read("posts/etc/new.md").starts_with("---\nlayout: post\n"));
}

#[test]
fn test_unreadable_file_does_not_stop_run() {
    let tree = ContentTree::new();
    tree.write("posts/etc/a_bad.md", [0xffu8, 0xfe, 0xfd]);
    tree.write("posts/etc/b_good.md", "fine");

    tree.cmd()
        .arg("inject")
        .assert()
        .success()
        .stdout(predicate::str::contains("a_bad.md"))
        .stdout(predicate::str::contains("Processed: 1"))
        .stdout(predicate::str::contains("Errors: 1"));

    assert!(tree.read("posts/etc/b_good.md").starts_with("---\n"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let tree = ContentTree::new();
    tree.write("posts/invest/etf_basics.md", "etf");

    tree.cmd()
        .args(["inject", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would add"))
        .stdout(predicate::str::contains("Would process: 1"));

    assert_eq!(tree.read("posts/invest/etf_basics.md"), "etf");
}

#[test]
fn test_config_file_overrides_defaults() {
    let tree = ContentTree::new();
    tree.write(
        ".blogfm.toml",
        r#"
layout = "note"
exclude_dirs = ["drafts"]

[[categories]]
prefix = "posts/dev/rust"
categories = ["dev", "rust"]
"#,
    );
    tree.write("posts/dev/rust/lifetimes.md", "'a");
    tree.write("drafts/wip.md", "wip");
    tree.write("archive/now_included.md", "x");

    tree.cmd().arg("inject").assert().success().stdout(predicate::str::contains("Processed: 2"));

    let content = tree.read("posts/dev/rust/lifetimes.md");
    assert!(content.contains("layout: note\n"));
    assert!(content.contains("categories: [\"dev\", \"rust\"]\n"));
    assert_eq!(tree.read("drafts/wip.md"), "wip");
}

#[test]
fn test_invalid_config_fails() {
    let tree = ContentTree::new();
    tree.write(".blogfm.toml", "layout = [");

    tree.cmd()
        .arg("inject")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_root_fails() {
    let tree = ContentTree::new();
    let mut cmd = cargo_bin_cmd!("blogfm");
    cmd.env("NO_COLOR", "1").arg("--root").arg(tree.root().join("missing")).arg("inject");

    cmd.assert().failure().stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_preview_prints_header_without_writing() {
    let tree = ContentTree::new();
    let path = tree.write("posts/dev/git/rebase-vs-merge.md", "text");

    tree.cmd()
        .arg("preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: \"Rebase Vs Merge\""))
        .stdout(predicate::str::contains("categories: [\"dev\", \"git\"]"));

    assert_eq!(tree.read("posts/dev/git/rebase-vs-merge.md"), "text");
}

#[test]
fn test_preview_reports_existing_header() {
    let tree = ContentTree::new();
    let path = tree.write("posts/etc/done.md", "---\ntitle: x\n---\n");

    tree.cmd()
        .arg("preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));
}

#[test]
fn test_preview_missing_file_fails() {
    let tree = ContentTree::new();

    tree.cmd()
        .arg("preview")
        .arg(tree.root().join("nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

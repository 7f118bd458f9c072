//! End-to-end tests for the generated project layout

mod common;

use predicates::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Relative paths below `root`, skipping the git directory
fn tree(root: &Path) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut dirs = BTreeSet::new();
    let mut files = BTreeSet::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
    {
        let entry = entry.expect("walk generated project");
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("entry below root")
            .to_string_lossy()
            .replace('\\', "/");
        if entry.file_type().is_dir() {
            dirs.insert(rel);
        } else {
            files.insert(rel);
        }
    }

    (dirs, files)
}

#[test]
fn test_shop_scenario() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane").assert().success();

    assert!(dir.path.join("shop/packages/is-even").is_dir());
    assert!(dir.path.join("shop/packages/is-odd").is_dir());

    let is_even = dir.manifest("shop/packages/is-even/package.json");
    assert_eq!(is_even.name, "is-even");
    assert!(is_even.dependencies.is_empty());

    let is_odd = dir.manifest("shop/packages/is-odd/package.json");
    assert_eq!(is_odd.name, "is-odd");
    assert!(is_odd.dependencies.contains_key("is-even"));

    let root = dir.manifest("shop/package.json");
    assert_eq!(root.name, "shop");
    assert!(root.private);
    assert_eq!(root.author.as_deref(), Some("Jane"));
    assert_eq!(root.workspaces, vec!["packages/*".to_string()]);
    assert!(root.scripts.contains_key("test:is-even"));
}

#[test]
fn test_generated_tree_has_no_extraneous_entries() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane").assert().success();

    let (dirs, files) = tree(&dir.path.join("shop"));

    let expected_dirs: BTreeSet<String> = ["packages", "packages/is-even", "packages/is-odd"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(dirs, expected_dirs);

    let expected_files: BTreeSet<String> = [
        ".gitignore",
        "LICENSE",
        "README.md",
        "package.json",
        "packages/is-even/README.md",
        "packages/is-even/index.js",
        "packages/is-even/package.json",
        "packages/is-odd/README.md",
        "packages/is-odd/index.js",
        "packages/is-odd/package.json",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(files, expected_files);
}

#[test]
fn test_git_repository_is_initialized() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane").assert().success();

    assert!(dir.path.join("shop/.git").is_dir());
}

#[test]
fn test_no_git_flag() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane")
        .arg("--no-git")
        .assert()
        .success();

    assert!(!dir.file_exists("shop/.git"));
    assert!(dir.file_exists("shop/package.json"));
}

#[test]
fn test_license_and_readme_mention_names() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane Doe").assert().success();

    assert!(dir.read_file("shop/LICENSE").contains("Copyright (c) Jane Doe"));
    assert!(dir.read_file("shop/README.md").starts_with("# shop"));
    assert!(
        dir.read_file("shop/packages/is-odd/index.js")
            .contains("require(\"is-even\")")
    );
}

#[test]
fn test_rerun_overwrites_files() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane").assert().success();

    dir.write_file("shop/packages/is-even/README.md", "local edits");
    dir.write_file("shop/notes.txt", "keep me");

    common::create_cmd(&dir.path, "shop", "Jane").assert().success();

    assert!(
        dir.read_file("shop/packages/is-even/README.md")
            .starts_with("# is-even")
    );
    assert_eq!(dir.read_file("shop/notes.txt"), "keep me");
}

#[test]
fn test_dry_run_creates_nothing() {
    let dir = common::TestDir::new();
    common::create_cmd(&dir.path, "shop", "Jane")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("is-odd"))
        .stdout(predicate::str::contains(".gitignore"));

    assert!(!dir.file_exists("shop"));
}

#[test]
fn test_rendering_is_deterministic_across_runs() {
    let first = common::TestDir::new();
    let second = common::TestDir::new();
    common::create_cmd(&first.path, "shop", "Jane").assert().success();
    common::create_cmd(&second.path, "shop", "Jane").assert().success();

    let (_, files) = tree(&first.path.join("shop"));
    for file in files {
        let path = format!("shop/{file}");
        assert_eq!(first.read_file(&path), second.read_file(&path), "{file} differs");
    }
}

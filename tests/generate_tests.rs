//! Integration tests for post generation

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{commit_changelog, git, init_repo, post_cmd, CHANGELOG};

const BEFORE: &str = "\
# Changelog

## Unreleased

## 2025-12-01 — Older Release

- Old thing
";

const AFTER: &str = "\
# Changelog

## Unreleased

## 2025-12-30 — Sample Release

### Added

- A new thing

## 2025-12-01 — Older Release

- Old thing
";

const POST: &str = "_posts/2025-12-30-sample-release.md";

/// Repository with two changelog commits; returns (dir, before, after)
fn setup() -> (TempDir, String, String) {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    let before = commit_changelog(temp.path(), BEFORE);
    let after = commit_changelog(temp.path(), AFTER);
    (temp, before, after)
}

#[test]
fn test_generates_post_from_added_heading() {
    let (temp, before, after) = setup();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Generated post at {}", POST)));

    let content = fs::read_to_string(temp.path().join(POST)).unwrap();
    assert_eq!(
        content,
        "\
---
title: \"Sample Release\"
description: \"Release notes for 2025-12-30: Sample Release.\"
date: 2025-12-30
author: \"COO\"
tags: [\"release\", \"changelog\"]
---

# Sample Release

This post was automatically generated from `docs/changelog.md`.

## Release Notes

### Added

- A new thing
"
    );
}

#[test]
fn test_writes_github_output() {
    let (temp, before, after) = setup();
    let output_file = temp.path().join("github_output.txt");

    post_cmd()
        .current_dir(temp.path())
        .env("GITHUB_OUTPUT", &output_file)
        .args(["--before", &before, "--after", &after])
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(
        content,
        format!(
            "created=true\npost_path={}\nrelease_date=2025-12-30\nrelease_title=Sample Release\n",
            POST
        )
    );
}

#[test]
fn test_second_run_skips_existing_post() {
    let (temp, before, after) = setup();
    let output_file = temp.path().join("github_output.txt");

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .success();
    let first = fs::read_to_string(temp.path().join(POST)).unwrap();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .arg("--github-output")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Post already exists"));

    assert_eq!(fs::read_to_string(temp.path().join(POST)).unwrap(), first);
    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, format!("created=false\npost_path={}\n", POST));
}

#[test]
fn test_no_new_heading_succeeds_without_post() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    let before = commit_changelog(temp.path(), BEFORE);
    let after = commit_changelog(temp.path(), &format!("{}- Another old thing\n", BEFORE));
    let output_file = temp.path().join("github_output.txt");

    post_cmd()
        .current_dir(temp.path())
        .env("GITHUB_OUTPUT", &output_file)
        .args(["--before", &before, "--after", &after])
        .assert()
        .success()
        .stdout(predicate::str::contains("No new release heading detected"));

    assert!(!temp.path().join("_posts").exists());
    assert_eq!(fs::read_to_string(&output_file).unwrap(), "created=false\n");
}

#[test]
fn test_invalid_revision_fails() {
    let (temp, before, _after) = setup();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", "does-not-exist"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Git command failed"));
}

#[test]
fn test_heading_missing_from_working_copy_fails() {
    let (temp, before, after) = setup();
    fs::write(temp.path().join(CHANGELOG), BEFORE).unwrap();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Release heading not found"));

    assert!(!temp.path().join(POST).exists());
}

#[test]
fn test_author_and_tags_flags() {
    let (temp, before, after) = setup();

    post_cmd()
        .arg("--repo")
        .arg(temp.path())
        .args(["--before", &before, "--after", &after])
        .args(["--author", "CTO", "--tags", "news, product,"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(POST)).unwrap();
    assert!(content.contains("author: \"CTO\"\n"));
    assert!(content.contains("tags: [\"news\", \"product\"]\n"));
}

#[test]
fn test_config_file_in_repo() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    fs::write(
        temp.path().join(".changelog-post.toml"),
        "posts_dir = \"blog/_posts\"\nauthor = \"Release Bot\"\n",
    )
    .unwrap();
    let before = commit_changelog(temp.path(), BEFORE);
    let after = commit_changelog(temp.path(), AFTER);

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated post at blog/_posts/2025-12-30-sample-release.md",
        ));

    let content =
        fs::read_to_string(temp.path().join("blog/_posts/2025-12-30-sample-release.md")).unwrap();
    assert!(content.contains("author: \"Release Bot\"\n"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let (temp, before, after) = setup();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .args(["--config", "missing.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_unknown_config_key_fails() {
    let (temp, before, after) = setup();
    fs::write(temp.path().join(".changelog-post.toml"), "editor = \"vim\"\n").unwrap();

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error: Failed to parse"))
        .stderr(predicate::str::contains(".changelog-post.toml"));

    assert!(!temp.path().join(POST).exists());
}

#[test]
fn test_repo_flag_runs_git_in_repo_root() {
    let (temp, before, after) = setup();
    let elsewhere = TempDir::new().unwrap();

    post_cmd()
        .current_dir(elsewhere.path())
        .arg("--repo")
        .arg(temp.path())
        .args(["--before", &before, "--after", &after])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Generated post at {}", POST)));

    assert!(temp.path().join(POST).exists());
    assert!(!elsewhere.path().join("_posts").exists());
}

#[test]
fn test_custom_changelog_path() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    fs::write(temp.path().join("CHANGELOG.md"), BEFORE).unwrap();
    git(temp.path(), &["add", "-A"]);
    git(temp.path(), &["commit", "-q", "-m", "init"]);
    let before = git(temp.path(), &["rev-parse", "HEAD"]);
    fs::write(temp.path().join("CHANGELOG.md"), AFTER).unwrap();
    git(temp.path(), &["commit", "-q", "-am", "release"]);
    let after = git(temp.path(), &["rev-parse", "HEAD"]);

    post_cmd()
        .current_dir(temp.path())
        .args(["--before", &before, "--after", &after])
        .args(["--changelog", "CHANGELOG.md"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(POST)).unwrap();
    assert!(content.contains("generated from `CHANGELOG.md`"));
}

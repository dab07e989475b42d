use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const CHANGELOG: &str = "docs/changelog.md";

pub fn post_cmd() -> Command {
    let mut cmd = Command::cargo_bin("changelog-post").unwrap();
    cmd.env_remove("GITHUB_OUTPUT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run git in `dir` with a fixed identity, returning trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
}

/// Write the changelog and commit it, returning the new commit SHA
pub fn commit_changelog(dir: &Path, content: &str) -> String {
    let path = dir.join(CHANGELOG);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-q", "-m", "update changelog"]);
    git(dir, &["rev-parse", "HEAD"])
}

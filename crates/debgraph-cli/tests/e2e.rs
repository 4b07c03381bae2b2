//! End-to-end runs of the `debgraph` binary against temp repository
//! files, covering exit codes, the statistics report, the ASCII tree,
//! warnings, and the DOT artifact.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REPO: &str = "\
Package: app
Depends: libfoo (>= 1.0), libbar | libbar2, libmissing

Package: libfoo
Depends: libbaz

Package: libbar
Depends: libbaz, app

Package: libbaz

Package: testonly-harness
Depends: app
";

fn debgraph_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("debgraph"));
    cmd.current_dir(dir);
    cmd.env("DEBGRAPH_LOG", "error");
    cmd
}

fn write_repo(dir: &Path) -> String {
    let path = dir.join("Packages");
    fs::write(&path, REPO).expect("write repo fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn resolves_local_repository_and_writes_dot() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency graph for 'app'"))
        .stdout(predicate::str::contains("packages:"))
        .stdout(predicate::str::contains("graph written to dependency-graph.dot"));

    let dot = fs::read_to_string(dir.path().join("dependency-graph.dot")).expect("dot written");
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("\"app\""));
    assert!(dot.contains("\"libfoo\""));
}

#[test]
fn cycle_is_reported_and_terminates() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    // app → libbar → app closes a cycle.
    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cycles:"))
        .stdout(predicate::str::contains("yes ("));
}

#[test]
fn ascii_tree_renders_connectors_and_cycle_marker() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode", "--ascii-tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("├── "))
        .stdout(predicate::str::contains("└── "))
        .stdout(predicate::str::contains("cycle"));
}

#[test]
fn missing_transitive_dependency_warns_but_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("libmissing"));
}

#[test]
fn missing_root_package_fails() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["ghost", &repo, "--test-repo-mode"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_repository_file_fails() {
    let dir = TempDir::new().expect("temp dir");

    debgraph_cmd(dir.path())
        .args(["app", "no-such-file", "--test-repo-mode"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-such-file"));
}

#[test]
fn max_depth_limits_expansion() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode", "-d", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"packages: +1\n").expect("valid regex"));
}

#[test]
fn zero_depth_is_a_validation_error() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode", "--max-depth", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn filter_prunes_matching_packages() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    // libfoo trips the filter: still listed under app in the tree but
    // never expanded, so the key count drops from 5 to 4.
    debgraph_cmd(dir.path())
        .args(["app", &repo, "--test-repo-mode", "-f", "foo", "--ascii-tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("libfoo"))
        .stdout(predicate::str::is_match(r"packages: +4\n").expect("valid regex"));
}

#[test]
fn invalid_url_without_test_mode_fails() {
    let dir = TempDir::new().expect("temp dir");

    debgraph_cmd(dir.path())
        .args(["app", "/local/path"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid repository URL"));
}

#[test]
fn missing_arguments_exit_one_not_two() {
    let dir = TempDir::new().expect("temp dir");

    debgraph_cmd(dir.path())
        .args(["only-a-package"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn custom_output_path_is_honored() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["libbaz", &repo, "--test-repo-mode", "-o", "graph.dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph written to graph.dot"));

    assert!(dir.path().join("graph.dot").exists());
}

#[test]
fn verbose_prints_configuration() {
    let dir = TempDir::new().expect("temp dir");
    let repo = write_repo(dir.path());

    debgraph_cmd(dir.path())
        .args(["libbaz", &repo, "--test-repo-mode", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration"))
        .stdout(predicate::str::contains("test repo mode: true"));
}

//! End-to-end tests for the durank binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn durank() -> Command {
    let mut cmd = Command::cargo_bin("durank").expect("binary should build");
    cmd.arg("--no-progress");
    cmd
}

fn sample_tree() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("a"), vec![0u8; 100]).unwrap();
    fs::write(temp.path().join("b"), vec![0u8; 200]).unwrap();
    fs::create_dir(temp.path().join("A")).unwrap();
    fs::write(temp.path().join("A/c"), vec![0u8; 50]).unwrap();
    temp
}

#[test]
fn test_report_layout() {
    let temp = sample_tree();
    let root = temp.path().display().to_string();

    let output = durank().arg("--root").arg(temp.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let rule = "-".repeat(96);

    assert_eq!(lines[0], format!("Scanning directory sizes under: {}", root));
    assert_eq!(lines[1], "This can take significant time on large drives...");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Scanned directories: 2");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "Top 2 directories by recursive size:");
    assert_eq!(lines[6], rule);
    assert_eq!(lines[7], "Rank          Size  Path");
    assert_eq!(lines[8], rule);
    assert_eq!(lines[9], format!("   1      350.00 B  {}", root));
    assert_eq!(lines[10], format!("   2       50.00 B  {}/A", root));
    assert_eq!(lines.len(), 11);
}

#[test]
fn test_top_is_coerced_to_one() {
    let temp = sample_tree();
    durank()
        .arg("--root")
        .arg(temp.path())
        .args(["--top", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 directories by recursive size:"));
}

#[test]
fn test_tree_section() {
    let temp = sample_tree();
    durank()
        .arg("--root")
        .arg(temp.path())
        .args(["--tree", "--tree-depth", "1", "--tree-children", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Largest children tree view:"))
        .stdout(predicate::str::contains("└── A (50.00 B)"));
}

#[test]
fn test_missing_root_fails_before_scanning() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");
    durank()
        .arg("--root")
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Root path does not exist or is not a directory",
        ));
}

#[test]
fn test_file_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    durank().arg("--root").arg(&file).assert().failure();
}

#[test]
fn test_csv_export() {
    let temp = sample_tree();
    let out_dir = TempDir::new().unwrap();
    let csv_path = out_dir.path().join("ranking.csv");

    durank()
        .arg("--root")
        .arg(temp.path())
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("CSV output written to:"));

    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "rank,path,size_bytes,size_human");
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].contains(",350,"));
    assert_eq!(lines.len(), 3);
}

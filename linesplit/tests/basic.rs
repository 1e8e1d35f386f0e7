use std::fs;
use std::path::Path;
use std::process::Command;

fn write_numbered_lines(path: &Path, count: usize) {
    let body: String = (1..=count).map(|n| format!("line {n}\n")).collect();
    fs::write(path, body).expect("write fixture");
}

#[test]
fn split_subcommand_writes_parts() {
    let exe = env!("CARGO_BIN_EXE_linesplit");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.txt");
    write_numbered_lines(&input, 10);
    let out = dir.path().join("out");

    let output = Command::new(exe)
        .args(["split", "--parts", "3", "--output-dir"])
        .arg(&out)
        .arg(&input)
        .output()
        .expect("run linesplit");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10 lines into 3 parts"));
    assert!(stdout.contains("split 1 of 1 files"));
    assert!(out.join("input_part1.txt").exists());
    assert!(out.join("input_part2.txt").exists());
    assert!(out.join("input_part3.txt").exists());
}

#[test]
fn split_subcommand_reports_failures_but_continues() {
    let exe = env!("CARGO_BIN_EXE_linesplit");
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("good.txt");
    write_numbered_lines(&good, 4);
    let missing = dir.path().join("missing.txt");

    let output = Command::new(exe)
        .args(["split", "--parts", "2"])
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("run linesplit");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("split 1 of 2 files"));
    assert!(stderr.contains("missing.txt"));
}

#[test]
fn split_subcommand_fails_when_nothing_succeeds() {
    let exe = env!("CARGO_BIN_EXE_linesplit");
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");

    let status = Command::new(exe)
        .args(["split", "--parts", "2"])
        .arg(&missing)
        .status()
        .expect("run linesplit");

    assert!(!status.success());
}

#[test]
fn zero_parts_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_linesplit");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.txt");
    write_numbered_lines(&input, 4);

    let output = Command::new(exe)
        .args(["split", "--parts", "0"])
        .arg(&input)
        .output()
        .expect("run linesplit");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 1"));
}

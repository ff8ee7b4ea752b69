/*!
 * Integration tests for the takeout binary
 */

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn takeout() -> Command {
    Command::new(env!("CARGO_BIN_EXE_takeout"))
}

#[test]
fn test_run_against_custom_root() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("main.dart"), "void main() {}\n").unwrap();
    fs::write(root.join("pubspec.yaml"), "name: demo\n").unwrap();

    let output = takeout()
        .args(["--root", &root.to_string_lossy(), "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Takeout Complete!"));

    let takeout_dir = root.join("takeout");
    assert_eq!(
        fs::read_to_string(takeout_dir.join("lib_main.txt")).unwrap(),
        "void main() {}\n"
    );
    assert!(takeout_dir.join("pubspec.txt").exists());

    let guide = fs::read_to_string(takeout_dir.join("directory_structure_guide.txt")).unwrap();
    assert!(guide.contains("windows (not found)"));
    assert!(guide.contains("assets (not found)"));
}

#[test]
fn test_progress_lines_and_custom_output_dir() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("windows").join("runner")).unwrap();
    fs::write(root.join("windows/runner/main.cpp"), "int main() {}\n").unwrap();
    fs::write(root.join("windows/runner/resource.h"), "#pragma once\n").unwrap();

    let output = takeout()
        .args(["--root", &root.to_string_lossy(), "--output-dir", "bundle"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Copied and converted: windows/runner/main.cpp -> windows_runner_main.txt"));
    assert!(stdout.contains("Skipping blacklisted file: windows/runner/resource.h"));
    assert!(stdout.contains("Skipping file copy for 'assets'"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Path 'lib' not found"));

    assert!(root.join("bundle").join("windows_runner_main.txt").exists());
    assert!(!root.join("takeout").exists());
}

#[test]
fn test_failure_exits_with_error_banner() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let output = takeout()
        .args(["--root", &missing.to_string_lossy(), "--quiet"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("An error occurred"));
    assert!(stderr.contains("(not-found)"));
}

#[test]
fn test_collision_exits_with_error_banner() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("app.dart"), "").unwrap();
    fs::write(root.join("lib").join("app.json"), "{}").unwrap();

    let output = takeout()
        .args(["--root", &root.to_string_lossy(), "--quiet"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("(collision)"));
    assert!(stderr.contains("lib_app.txt"));
}

#[test]
fn test_quiet_still_prints_warnings() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(root.join("lib").join("main.dart"), "void main() {}\n").unwrap();

    let output = takeout()
        .args(["--root", &root.to_string_lossy(), "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Copied and converted"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: Path 'windows' not found"));
    assert!(stderr.contains("Warning: Path 'pubspec.yaml' not found"));
}

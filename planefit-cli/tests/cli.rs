//! Runs the `planefit` binary against files on disk

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("planefit_cli_{}_{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn parse_line(stdout: &[u8]) -> Vec<f64> {
    let text = String::from_utf8(stdout.to_vec()).unwrap();
    assert!(text.ends_with('\n'), "output must end with a newline: {:?}", text);
    assert_eq!(text.lines().count(), 1, "expected a single line: {:?}", text);

    text.trim_end()
        .split(' ')
        .map(|c| c.parse::<f64>().unwrap())
        .collect()
}

#[test]
fn test_reads_input_txt_from_working_directory() {
    let dir = temp_dir("default");
    fs::write(dir.join("input.txt"), "0.01\n3\n0 0 1\n1 0 1\n0 1 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_planefit"))
        .current_dir(&dir)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let coefficients = parse_line(&output.stdout);
    assert_eq!(coefficients.len(), 4);

    // z = 1, orientation depends on the sample order
    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert_eq!(coefficients[0].abs(), 0.0);
    assert_eq!(coefficients[1].abs(), 0.0);
    assert!((coefficients[2].abs() - s).abs() < 1e-6);
    assert!((coefficients[2] + coefficients[3]).abs() < 1e-6);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_input_flag_and_plane_with_outlier() {
    let dir = temp_dir("flag");
    let path = dir.join("cloud.txt");
    fs::write(&path, "0.1 4\n0 0 0\n1 0 0\n0 1 0\n0.3 0.3 10\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_planefit"))
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(parse_line(&output.stdout).len(), 4);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_fails() {
    let dir = temp_dir("missing");

    let output = Command::new(env!("CARGO_BIN_EXE_planefit"))
        .current_dir(&dir)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"), "stderr: {}", stderr);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_too_few_points_fails() {
    let dir = temp_dir("few");
    fs::write(dir.join("input.txt"), "0.1 2\n0 0 0\n1 1 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_planefit"))
        .current_dir(&dir)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Insufficient points"), "stderr: {}", stderr);

    let _ = fs::remove_dir_all(&dir);
}

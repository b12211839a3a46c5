//! Exit codes and error output of the genesis-rider binary
use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genesis-rider"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GENESIS_RIDER_STRICT_HEADER")
        .env_remove("GENESIS_RIDER_REPORT_FORMAT")
        .output()
        .unwrap_or_else(|e| panic!("Error running genesis-rider: {}", e))
}

fn temp_file(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("genesis-rider-cli-{}", name));
    std::fs::write(&path, data).unwrap_or_else(|e| {
        panic!("Error writing test file: {}", e);
    });
    path
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(String::from)
        .collect()
}

/// A linear image with a licensed console name
fn linear_image(length: usize) -> Vec<u8> {
    let mut data = vec![0u8; length];
    data[0x100..0x110].copy_from_slice(b"SEGA GENESIS    ");
    data[0x110..0x118].copy_from_slice(b"(C)SEGA ");
    data
}

#[test]
fn no_arguments_prints_usage() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: genesis-rider"));
}

#[test]
fn too_many_arguments_is_an_unknown_option() {
    let output = run(&["a.bin", "b.smd", "c.bin"]);

    assert_eq!(output.status.code(), Some(127));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: genesis-rider"));
}

#[test]
fn unrecognised_flag_is_an_unknown_option() {
    let output = run(&["-x"]);

    assert_eq!(output.status.code(), Some(127));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: genesis-rider"));
}

#[test]
fn small_file_fails_with_one_line() {
    let path = temp_file("small.bin", &[0u8; 511]);
    let name = path.display().to_string();

    let output = run(&[name.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_lines(&output),
        vec![format!("File is too small: {}", name)]
    );

    std::fs::remove_file(&path).unwrap_or_else(|e| {
        panic!("Error removing test file: {}", e);
    });
}

#[test]
fn unlicensed_image_fails_conversion_with_one_line() {
    let input = temp_file("blank.bin", &[0u8; 20000]);
    let output_path = std::env::temp_dir().join("genesis-rider-cli-blank.smd");
    let _ = std::fs::remove_file(&output_path);
    let name = input.display().to_string();
    let out = output_path.display().to_string();

    let output = run(&[name.as_str(), out.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_lines(&output),
        vec![format!("Invalid ROM header: {}", name)]
    );
    assert!(!output_path.exists());

    std::fs::remove_file(&input).unwrap_or_else(|e| {
        panic!("Error removing test file: {}", e);
    });
}

#[test]
fn inspect_prints_the_header() {
    let path = temp_file("linear.bin", &linear_image(1024));
    let name = path.display().to_string();

    let output = run(&[name.as_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    let report = String::from_utf8_lossy(&output.stdout);
    assert!(report.contains("Binary"));
    assert!(report.contains("Sega"));

    std::fs::remove_file(&path).unwrap_or_else(|e| {
        panic!("Error removing test file: {}", e);
    });
}

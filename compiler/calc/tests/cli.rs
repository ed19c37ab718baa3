use std::fs;
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn interpreter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_interpreter"))
}

#[test]
fn interprets_input_file_into_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("statements.txt");
    let output = dir.path().join("results.txt");
    fs::write(&input, "1+2;\n   \n)1+2;\n").unwrap();

    let status = interpreter().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "1+2;\nSyntax OK\nValue is 3\n\n)1+2;\n===> '(' expected\nSyntax Error\n\n"
    );
}

#[test]
fn missing_arguments_print_usage() {
    let out = interpreter().output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn unreadable_input_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = dir.path().join("results.txt");

    let out = interpreter().arg(&missing).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: could not open"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn token_flag_lists_lexemes() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("statements.txt");
    let output = dir.path().join("lexemes.txt");
    fs::write(&input, "12 * (3 + 4); 5 != 6;\n").unwrap();

    let status = interpreter()
        .arg("--tokens")
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "12 * (3 + 4); 5 != 6;\n12*(3+4);\n5!=6;\n\n"
    );
}

#[test]
fn depth_limit_from_environment() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("statements.txt");
    let output = dir.path().join("results.txt");
    fs::write(&input, "((1));\n").unwrap();

    let status = interpreter()
        .env("CALC_MAX_DEPTH", "1")
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "((1));\n===> maximum nesting depth of 1 exceeded\nRuntime Error\n\n"
    );
}

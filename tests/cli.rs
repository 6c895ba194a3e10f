use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_infix"))
}

fn run_cmd(args: &[&str]) -> Result<Output, String> {
    Command::new(bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .map_err(|e| e.to_string())
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_result() -> Result<(), String> {
    let output = run_cmd(&["1", "+", "2", "*", "3"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["7"]);
    Ok(())
}

#[test]
fn leading_minus_terms_are_not_flags() -> Result<(), String> {
    let output = run_cmd(&["-4", "-", "10"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["-14"]);
    Ok(())
}

#[test]
fn division_by_zero_is_infinite() -> Result<(), String> {
    let output = run_cmd(&["1", "/", "0"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["inf"]);
    Ok(())
}

#[test]
fn error_goes_to_stdout_with_nan_and_exit_zero() -> Result<(), String> {
    let output = run_cmd(&["1", "2"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["invalid result stack", "NaN"]);

    let output = run_cmd(&["+"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), ["invalid eval stack", "NaN"]);
    Ok(())
}

#[test]
fn malformed_operand_is_reported() -> Result<(), String> {
    let output = run_cmd(&["1", "+", "abc"])?;
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("malformed operand `abc`"));
    assert_eq!(lines[1], "NaN");
    Ok(())
}

#[test]
fn strict_mode_exits_non_zero() -> Result<(), String> {
    let output = run_cmd(&["--strict", "1", "2"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid result stack"));
    Ok(())
}

#[test]
fn postfix_flag_prints_rpn() -> Result<(), String> {
    let output = run_cmd(&["--postfix", "10", "-", "2", "*", "3"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["10 2 3 * -", "4"]);
    Ok(())
}

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_buffer-ownership"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    {
        let mut stdin = child.stdin.take().expect("stdin was piped");
        // The binary reads at most one line, so it may exit before a long
        // input is fully written.
        let _ = stdin.write_all(input);
    } // closing stdin signals end of input

    child.wait_with_output().expect("failed to wait on binary")
}

#[test]
fn test_hello_line_is_silent() {
    let output = run_with_stdin(b"hello\n");
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_empty_input_prints_diagnostic() {
    let output = run_with_stdin(b"");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"fgets() failed");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_long_line_is_accepted() {
    let mut input = vec![b'x'; 500];
    input.push(b'\n');
    let output = run_with_stdin(&input);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_line_without_newline() {
    let output = run_with_stdin(b"partial");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_arguments_are_ignored() {
    let output = Command::new(env!("CARGO_BIN_EXE_buffer-ownership"))
        .arg("--unused")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"fgets() failed");
}

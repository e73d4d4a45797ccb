use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sss2-discriminators"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn default_run_prints_instruction_table() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "SSS-2 Hook Instruction Discriminators:");
    assert_eq!(lines[1], "=".repeat(50));
    assert_eq!(
        lines[2],
        "initialize               : [175, 175, 109, 31, 13, 152, 155, 237]"
    );
    assert_eq!(
        lines[12],
        "closeConfig              : [180, 88, 124, 46, 245, 187, 221, 214]"
    );

    for line in &lines[2..] {
        let (name, bytes) = line.split_at(25);
        assert!(!name.trim_end().is_empty(), "{}", line);
        assert!(bytes.starts_with(": [") && bytes.ends_with(']'), "{}", line);
        let bytes: Vec<u8> = bytes[3..bytes.len() - 1]
            .split(", ")
            .map(|b| b.parse().expect("decimal byte"))
            .collect();
        assert_eq!(bytes.len(), 8, "{}", line);
    }
}

#[test]
fn logging_does_not_touch_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_sss2-discriminators"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("runs");

    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 13);
}

#[test]
fn all_sections_in_hex() {
    let output = run(&["--all", "--format", "hex"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("initialize               : afaf6d1f0d989bed\n"));
    assert!(stdout.contains("TransferHookConfig       : a87abfddccc99558\n"));
    assert!(stdout.contains("PermanentDelegateUpdated : 48586e3034b1bfab\n"));
}

#[test]
fn snake_case_instructions() {
    let output = run(&["--snake-case"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("execute_transfer_hook    : [120, 157, 67, 141, 88, 144, 143, 220]\n"));
    assert!(!stdout.contains("executeTransferHook"));
}

#[test]
fn requested_names_in_base58() {
    let output = run(&["--format", "base58", "initialize", "closeConfig"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Requested Discriminators:",
            "==================================================",
            "initialize               : WPNHsFPyEMr",
            "closeConfig              : XAaZdbSrLfP",
        ]
    );
}

#[test]
fn unknown_format_exits_non_zero() {
    let output = run(&["--format", "octal"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown byte format: octal"), "{}", stderr);
}

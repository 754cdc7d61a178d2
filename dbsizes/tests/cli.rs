#![cfg(unix)]

use std::process::{Command, Output};

const HEADER: &str = "Database                       Size (MB)\n\
                      ---------------------------------------------\n";

fn dbsizes() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dbsizes"));
    cmd.env_remove("RUST_LOG")
        .env("DB_USER", "reporter")
        .env("DB_PASSWORD", "shh");
    cmd
}

fn assert_fatal(output: &Output, expected: &str) {
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    assert_eq!(stderr.lines().count(), 1, "stderr: {:?}", stderr);
    assert_eq!(stderr, format!("dbsizes: {}\n", expected));
}

#[test]
fn missing_user_exits_without_report() {
    let output = dbsizes()
        .env_remove("DB_USER")
        .env("DB_CLIENT", "true")
        .output()
        .unwrap();

    assert_fatal(
        &output,
        "database credentials are not set in environment variables (DB_USER)",
    );
}

#[test]
fn failing_client_exits_without_report() {
    let output = dbsizes().env("DB_CLIENT", "false").output().unwrap();

    assert_fatal(&output, "failed to run command: exit status: 1");
}

#[test]
fn header_only_report_on_success() {
    // echo prints its arguments on one line, which is dropped as the header
    let output = dbsizes().env("DB_CLIENT", "echo").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), HEADER);
    assert!(output.stderr.is_empty());
}

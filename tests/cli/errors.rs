//! Tests for error reporting and global flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    let out = stdout(&output);
    for command in ["get", "set", "populate", "import", "run", "completions"] {
        assert!(out.contains(command), "help missing {}: {}", command, out);
    }
}

#[test]
fn test_legacy_aliases_in_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "getKey");
    assert_stdout_contains(&output, "populateEnv");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    assert_failure(&t.run(&["unknown-command"]));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "ssmenv");
}

#[test]
fn test_error_footer_and_exit_code() {
    let t = Test::new();

    t.cmd()
        .args(["get", "API_KEY"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗").and(predicate::str::contains(
            "Process exited with error code: [1]",
        )));
}

#[test]
fn test_malformed_config_file() {
    let t = Test::new();
    t.write(".ssmenv.toml", "[ssmenv\n");

    let output = t.get(&["/GLOBAL"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t.run(&["--verbose", "get", "/GLOBAL"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_quiet_by_default() {
    let t = Test::new();

    let output = t.get(&["/GLOBAL"]);
    assert!(!stderr(&output).contains("DEBUG"));
}

#[test]
fn test_log_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SSMENV_LOG", "debug")
        .args(["get", "/GLOBAL"])
        .output()
        .unwrap();
    assert_stderr_contains(&output, "DEBUG");
}

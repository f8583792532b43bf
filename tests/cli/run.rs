//! Tests for `ssmenv run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_default_env_is_development() {
    let t = Test::new();
    t.write(".env/development.env", SAMPLE_ENV);

    let output = t.run(&["run", "--", "sh", "-c", "echo \"$GREETING $TARGET\""]);
    assert_success(&output);
    assert_stdout_contains(&output, "hello big world");
}

#[cfg(unix)]
#[test]
fn test_env_variable_alias() {
    let t = Test::new();
    t.write(".env/production.env", "MODE=prod\n");

    let output = t
        .cmd()
        .env("ENV", "prod")
        .args(["run", "--", "sh", "-c", "echo $MODE"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "prod");
}

#[cfg(unix)]
#[test]
fn test_child_exit_code_propagates() {
    let t = Test::new();
    t.write(".env", "A=1\n");

    let output = t.run(&["run", "--", "sh", "-c", "exit 7"]);
    assert_exit_code(&output, 7);
}

#[test]
fn test_unknown_env() {
    let t = Test::new();
    t.write(".env/qa.env", "A=1\n");

    let output = t.run(&["run", "--env", "nope", "--", "true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid ENV 'nope'");
    assert_stderr_contains(&output, "qa");
}

#[test]
fn test_missing_env_file() {
    let t = Test::new();

    let output = t.run(&["run", "--env", "staging", "--", "true"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "env file not found");
}

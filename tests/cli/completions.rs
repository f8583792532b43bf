//! Tests for `ssmenv completions`.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_bash() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ssmenv"));
}

#[test]
fn test_zsh() {
    let t = Test::new();

    let output = t.run(&["completions", "zsh"]);
    assert_success(&output);
    assert!(!stdout(&output).is_empty());
}

#[test]
fn test_completions_need_no_credentials_or_config() {
    let t = Test::new();
    t.write(".ssmenv.toml", "not toml at all [");

    t.cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_shell() {
    let t = Test::new();
    assert_failure(&t.run(&["completions", "tcsh"]));
}

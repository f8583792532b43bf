//! Tests for `ssmenv set`.

use crate::support::*;

#[test]
fn test_missing_value() {
    let t = Test::new();

    let output = t.set(&["API_KEY", "--env", "dev"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "value missing");
}

#[test]
fn test_relative_name_needs_env() {
    let t = Test::new();

    let output = t.set(&["API_KEY=abc"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with `/`");
}

#[test]
fn test_encrypted_list_rejected_before_auth() {
    let t = Test::new();

    let output = t.set(&["HOSTS=a,b", "--env", "dev", "--list", "--encrypt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "only strings can be encrypted");
}

#[test]
fn test_key_id_requires_encrypt() {
    let t = Test::new();

    let output = t.set(&["API_KEY=abc", "--env", "dev", "--key-id", "alias/app"]);
    assert_failure(&output);
}

#[test]
fn test_valid_input_reaches_credentials() {
    let t = Test::new();

    let output = t.run(&["setKey", "/GLOBAL=1"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "unable to find");
}

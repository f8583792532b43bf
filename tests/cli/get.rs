//! Tests for `ssmenv get`.

use crate::support::*;

#[test]
fn test_relative_name_needs_env() {
    let t = Test::new();

    let output = t.get(&["API_KEY"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with `/`");
}

#[test]
fn test_alias_is_accepted() {
    let t = Test::new();

    let output = t.run(&["getKey", "API_KEY"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with `/`");
}

#[test]
fn test_missing_credentials_non_interactive() {
    let t = Test::new();

    let output = t.get(&["API_KEY", "--env", "dev"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "unable to find");
    assert!(!t.credentials_path().exists());
}

#[test]
fn test_incomplete_credentials_file_is_ignored() {
    let t = Test::new();
    let path = t.credentials_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[default]\naws_access_key_id=AKIATEST\n").unwrap();

    let output = t.get(&["/GLOBAL"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unable to find");
}

#[test]
fn test_absolute_name_warns_env_unused() {
    let t = Test::new();

    let output = t.get(&["/a/b", "--env", "dev"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "env has no effect");
}

//! Tests for `ssmenv populate`.

use crate::support::*;

#[test]
fn test_env_is_required() {
    let t = Test::new();
    t.write(".envList", SAMPLE_ENV_LIST);

    assert_failure(&t.populate(&[]));
}

#[test]
fn test_missing_env_list() {
    let t = Test::new();

    let output = t.populate(&["--env", "dev"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "env list file not found");
}

#[test]
fn test_empty_env_list() {
    let t = Test::new();
    t.write(".envList", "");

    let output = t.populate(&["--env", "dev"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "env list file is empty");
}

#[test]
fn test_custom_list_file() {
    let t = Test::new();
    t.write("config/vars", "");

    let output = t.populate(&["--env", "dev", "--file", "config/vars"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config/vars");
}

#[test]
fn test_batch_size_out_of_range() {
    let t = Test::new();
    t.write(".envList", SAMPLE_ENV_LIST);

    let output = t.populate(&["--env", "dev", "--batch-size", "11"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid batch size 11");
}

#[test]
fn test_batch_size_from_config_file() {
    let t = Test::new();
    t.write(".envList", SAMPLE_ENV_LIST);
    t.write(".ssmenv.toml", "[ssmenv]\nbatch_size = 0\n");

    let output = t.populate(&["--env", "dev"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid batch size 0");
}

#[test]
fn test_no_output_without_credentials() {
    let t = Test::new();
    t.write(".envList", SAMPLE_ENV_LIST);

    let output = t.run(&["populateEnv", "--env", "dev"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "Need to fetch 3 variables");
    assert_stderr_contains(&output, "unable to find");
    assert!(!t.dir.path().join(".env").exists());
}

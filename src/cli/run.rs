//! Run command.
//!
//! Executes a command with an env file's variables injected.

use std::path::Path;

use zeroize::Zeroizing;

use crate::core::profile;
use crate::error::{Error, Result};

/// Run `command` with the env file for `env` loaded.
pub fn execute(env: Option<&str>, command: &[String]) -> Result<()> {
    let env = env.map(str::to_string).unwrap_or_else(profile::current_env);
    let exit_code = run_with_env(Path::new("."), &env, command)?;
    std::process::exit(exit_code);
}

/// Run a command with the resolved env file as environment variables.
fn run_with_env(root: &Path, env: &str, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let file = profile::load(root, env)?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);
    for (key, value) in file.into_entries() {
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}

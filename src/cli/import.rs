//! Import command.
//!
//! Stores every entry of a `.env` file as `/<env>/<KEY>`.

use std::path::Path;

use crate::cli::output;
use crate::core::domain::{EnvFile, Parameter};
use crate::core::name;
use crate::core::session::Session;
use crate::error::Result;

/// Parameters to write for each entry of `file`, in file order.
pub fn parameters(file: &EnvFile, env: &str, encrypt: bool, force: bool) -> Result<Vec<Parameter>> {
    file.entries()
        .iter()
        .map(|(key, value)| -> Result<Parameter> {
            let resolved = name::resolve(key, Some(env))?;
            let param = Parameter::new(resolved.into_path(), value.as_str())
                .with_secret(encrypt)
                .with_scope(Some(env.to_string()))
                .with_overwrite(force);
            param.kind()?;
            Ok(param)
        })
        .collect()
}

/// Import a `.env` file into the parameter store.
pub fn execute(session: &Session, path: &Path, env: &str, encrypt: bool, force: bool) -> Result<()> {
    let file = EnvFile::load(path)?;
    let params = parameters(&file, env, encrypt, force)?;

    if params.is_empty() {
        output::warn(&format!("no variables in {}", output::path(path.display())));
        return Ok(());
    }

    let written = session.client()?.put_sequential(&params)?;

    for param in &params {
        output::kv("stored", param.name());
    }
    output::success(&format!(
        "Imported {} variables into {}",
        written,
        output::key(env)
    ));
    Ok(())
}

//! Populate command.
//!
//! Reads the env list, fetches every referenced parameter in batches and
//! writes `.env/<env>.env` (or `--out`).

use std::path::PathBuf;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::env_list::EnvList;
use crate::core::populate;
use crate::core::session::Session;
use crate::error::Result;

/// Populate an env file for `env`.
pub fn execute(
    session: &Session,
    config: &Config,
    env: &str,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    batch_size: Option<usize>,
) -> Result<()> {
    let batch_size = config.batch_size(batch_size)?;
    let list = EnvList::load(config.list_file(file))?;
    let plan = list.plan(env)?;
    let out = config.output(out, env);

    output::info(&format!("Need to fetch {} variables", plan.names.len()));

    let report = populate::execute(session.client()?, &plan, &out, batch_size)?;

    if let Some(warning) = report.fetch.warning() {
        output::warn(&warning);
    }
    output::success(&format!(
        "Populated env file {} {}",
        output::path(report.path.display()),
        output::dimmed(&format!("({} variables)", report.written))
    ));
    Ok(())
}

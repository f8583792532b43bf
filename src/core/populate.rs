//! Env file population.
//!
//! Fetches the parameters an env list names, layers the list's literal
//! values on top and writes the result as an env file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::batch::{self, FetchReport};
use crate::core::client::ParameterClient;
use crate::core::domain::EnvFile;
use crate::core::env_list::Plan;
use crate::core::store::ParameterStore;
use crate::core::types::EnvMap;
use crate::error::Result;

/// Outcome of a populate run.
#[derive(Debug, Clone)]
pub struct PopulateReport {
    pub path: PathBuf,
    pub fetch: FetchReport,
    /// Entries written to the file
    pub written: usize,
}

/// Layer local overrides over remote values.
///
/// Remote keys keep their order; an overridden key keeps its position with
/// the local value, and new local keys are appended.
pub fn merge(mut remote: EnvMap, overrides: &EnvMap) -> EnvMap {
    for (key, value) in overrides {
        remote.insert(key.clone(), value.clone());
    }
    remote
}

/// Fetch everything in `plan`, merge overrides and write `out`.
///
/// # Errors
///
/// Returns any request error from the store or I/O error writing the file.
/// Unresolved names are only reported in `PopulateReport::fetch`.
pub fn execute<S: ParameterStore>(
    client: &ParameterClient<S>,
    plan: &Plan,
    out: &Path,
    batch_size: usize,
) -> Result<PopulateReport> {
    info!(count = plan.names.len(), "fetching variables");

    let fetch = batch::fetch_all(client, &plan.names, batch_size)?;
    let values = merge(fetch.values.clone(), &plan.overrides);

    let file = EnvFile::from_map(values, out);
    file.save()?;

    info!(path = %out.display(), entries = file.len(), "env file populated");

    Ok(PopulateReport {
        path: out.to_path_buf(),
        written: file.len(),
        fetch,
    })
}

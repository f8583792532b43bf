//! Batched parameter fetching.
//!
//! Names are split into consecutive batches and fetched one batch at a time.
//! Found values are merged under their short variable name; names the store
//! cannot resolve are collected and reported, never fatal.

use indexmap::IndexMap;
use tracing::debug;

use crate::core::client::ParameterClient;
use crate::core::domain::Parameter;
use crate::core::store::ParameterStore;
use crate::core::types::EnvMap;
use crate::error::Result;

/// Merged outcome of a batched fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Short name to value, in request order
    pub values: EnvMap,
    /// Names the store reported as unknown, in request order
    pub invalid: Vec<String>,
    /// Number of batch requests issued
    pub batches: usize,
}

impl FetchReport {
    pub fn is_complete(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Warning listing unresolved names, one `✘` line each.
    pub fn warning(&self) -> Option<String> {
        if self.invalid.is_empty() {
            return None;
        }

        let mut message = format!(
            "{} Parameters were not found in Parameter Store:",
            self.invalid.len()
        );
        for name in &self.invalid {
            message.push_str(&format!("\n✘ {}", name));
        }
        Some(message)
    }
}

/// Fetch `names` in batches of `batch_size`, strictly sequentially.
///
/// A `batch_size` of 0 is treated as 1. When two names share a short name,
/// the later one wins but keeps the earlier position.
///
/// # Errors
///
/// Returns the first request error; values fetched before it are discarded.
pub fn fetch_all<S: ParameterStore>(
    client: &ParameterClient<S>,
    names: &[String],
    batch_size: usize,
) -> Result<FetchReport> {
    let batch_size = batch_size.max(1);
    let mut report = FetchReport::default();

    for (index, batch) in names.chunks(batch_size).enumerate() {
        debug!(batch = index + 1, size = batch.len(), "fetching batch");

        let result = client.get_batch(batch)?;
        report.batches += 1;

        // The store does not preserve request order.
        let mut found: IndexMap<String, Parameter> = result
            .found
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect();

        for name in batch {
            if let Some(param) = found.shift_remove(name) {
                insert(&mut report.values, &param);
            }
        }
        for param in found.values() {
            insert(&mut report.values, param);
        }

        report.invalid.extend(result.invalid);
    }

    debug!(
        fetched = report.values.len(),
        invalid = report.invalid.len(),
        batches = report.batches,
        "fetch complete"
    );
    Ok(report)
}

fn insert(values: &mut EnvMap, param: &Parameter) {
    values.insert(param.short_name().to_string(), param.value().encode());
}

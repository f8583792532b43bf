//! Type aliases for domain concepts.

use indexmap::IndexMap;

/// A fully-qualified parameter path (e.g. `/production/service/API_KEY`).
pub type ParameterName = String;

/// A short variable name, the last segment of a parameter path.
pub type VariableName = String;

/// Ordered variable name to value mapping written to env files.
///
/// Insertion order is kept so the output file follows the fetch order.
pub type EnvMap = IndexMap<VariableName, String>;

//! Variable name resolution.
//!
//! Maps what a user types (`API_KEY`, `/SHARED`, `/team/svc/API_KEY`) plus an
//! optional environment scope onto the fully-qualified parameter name.

use tracing::warn;

use crate::error::{Result, ValidationError};

/// Outcome of resolving a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    path: String,
    scope_ignored: bool,
}

impl ResolvedName {
    /// Fully-qualified parameter name.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// True when a scope was given but the name was already absolute.
    pub fn scope_ignored(&self) -> bool {
        self.scope_ignored
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

impl std::fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Resolve a variable name against an optional scope.
///
/// - `foo` with scope `dev` becomes `/dev/foo`.
/// - `/foo` and `/a/b` (at most two segments) lose the leading slash.
/// - `/a/b/c` or deeper is returned unchanged.
/// - An absolute name with a scope ignores the scope and logs a warning.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` when the name is relative and no
/// scope is given, or when it is empty.
pub fn resolve(name: &str, scope: Option<&str>) -> Result<ResolvedName> {
    let scope = scope.filter(|s| !s.is_empty());

    if name.is_empty() || (scope.is_none() && !name.starts_with('/')) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
        }
        .into());
    }

    let mut scope_ignored = false;
    if let Some(scope) = scope {
        if !name.starts_with('/') {
            return Ok(ResolvedName {
                path: format!("/{}/{}", scope, name),
                scope_ignored,
            });
        }
        warn!(name, scope, "variable name starts with `/`, so env has no effect on it");
        scope_ignored = true;
    }

    // Up to two segments live below the root without a leading slash.
    let path = if name.split('/').count() < 4 {
        name[1..].to_string()
    } else {
        name.to_string()
    };

    Ok(ResolvedName {
        path,
        scope_ignored,
    })
}

/// Short variable name of a parameter: its last path segment.
pub fn short_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Split a `NAME=value` argument at the first `=`.
///
/// Both halves are trimmed. Returns `None` when the argument has no `=`.
pub fn split_assignment(arg: &str) -> Option<(&str, &str)> {
    arg.split_once('=').map(|(k, v)| (k.trim(), v.trim()))
}

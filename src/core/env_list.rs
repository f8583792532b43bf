//! `.envList` input files.
//!
//! One entry per line. Blank lines and `#` comments are skipped, `NAME=value`
//! lines are literal overrides, anything else names a parameter.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::core::name;
use crate::core::types::{EnvMap, ParameterName};
use crate::error::{EnvListError, Result};

/// A single line of an env list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Variable name to fetch, relative or absolute
    Reference(String),
    /// Local value written as-is
    Literal { key: String, value: String },
}

/// Parsed env list.
#[derive(Debug, Clone)]
pub struct EnvList {
    entries: Vec<Entry>,
    path: PathBuf,
}

/// What to fetch and what to override for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Fully-qualified names, de-duplicated, in list order
    pub names: Vec<ParameterName>,
    /// Literal values, in list order
    pub overrides: EnvMap,
}

impl EnvList {
    /// Read an env list from disk.
    ///
    /// # Errors
    ///
    /// Returns `EnvListError::NotFound` if the file is missing and
    /// `EnvListError::Empty` if it is zero bytes long. A file holding only
    /// whitespace or comments loads with no entries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(EnvListError::NotFound(display).into());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.is_empty() {
            return Err(EnvListError::Empty(display).into());
        }

        Ok(Self::parse(&contents, path))
    }

    /// Parse env list text.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| match name::split_assignment(line) {
                Some((key, value)) => Entry::Literal {
                    key: key.to_string(),
                    value: value.to_string(),
                },
                None => Entry::Reference(line.to_string()),
            })
            .collect();

        Self {
            entries,
            path: path.into(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve references against `env` and collect literal overrides.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` for a reference that cannot be
    /// resolved.
    pub fn plan(&self, env: &str) -> Result<Plan> {
        let mut names = IndexSet::new();
        let mut overrides = EnvMap::new();

        for entry in &self.entries {
            match entry {
                Entry::Reference(reference) => {
                    names.insert(name::resolve(reference, Some(env))?.into_path());
                }
                Entry::Literal { key, value } => {
                    overrides.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(Plan {
            names: names.into_iter().collect(),
            overrides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# service config
DATABASE_URL
API_KEY

/shared/common/SENTRY_DSN
PORT=8080
  LOG_LEVEL = debug
API_KEY
";

    #[test]
    fn test_parse_entries() {
        let list = EnvList::parse(SAMPLE, ".envList");
        assert_eq!(
            list.entries(),
            &[
                Entry::Reference("DATABASE_URL".into()),
                Entry::Reference("API_KEY".into()),
                Entry::Reference("/shared/common/SENTRY_DSN".into()),
                Entry::Literal {
                    key: "PORT".into(),
                    value: "8080".into()
                },
                Entry::Literal {
                    key: "LOG_LEVEL".into(),
                    value: "debug".into()
                },
                Entry::Reference("API_KEY".into()),
            ]
        );
    }

    #[test]
    fn test_plan_resolves_and_dedupes() {
        let plan = EnvList::parse(SAMPLE, ".envList").plan("production").unwrap();

        assert_eq!(
            plan.names,
            vec![
                "/production/DATABASE_URL",
                "/production/API_KEY",
                "/shared/common/SENTRY_DSN",
            ]
        );
        assert_eq!(plan.overrides.get("PORT").map(|s| s.as_str()), Some("8080"));
        assert_eq!(
            plan.overrides.get("LOG_LEVEL").map(|s| s.as_str()),
            Some("debug")
        );
    }

    #[test]
    fn test_root_reference() {
        let plan = EnvList::parse("/GLOBAL_FLAG\n", ".envList").plan("dev").unwrap();
        assert_eq!(plan.names, vec!["GLOBAL_FLAG"]);
    }

    #[test]
    fn test_literal_keeps_equals_in_value() {
        let list = EnvList::parse("QUERY=a=b\n", ".envList");
        assert_eq!(
            list.entries(),
            &[Entry::Literal {
                key: "QUERY".into(),
                value: "a=b".into()
            }]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = EnvList::load(tmp.path().join(".envList")).unwrap_err();
        assert!(matches!(err, Error::EnvList(EnvListError::NotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".envList");
        fs::write(&path, "").unwrap();

        let err = EnvList::load(&path).unwrap_err();
        assert!(matches!(err, Error::EnvList(EnvListError::Empty(_))));
    }

    #[test]
    fn test_whitespace_only_file_has_no_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".envList");
        fs::write(&path, "\n  \n").unwrap();

        let list = EnvList::load(&path).unwrap();
        assert!(list.entries().is_empty());
    }

    #[test]
    fn test_comments_only_file_has_no_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".envList");
        fs::write(&path, "# nothing yet\n").unwrap();

        let list = EnvList::load(&path).unwrap();
        assert!(list.entries().is_empty());
        assert_eq!(list.plan("dev").unwrap(), Plan::default());
    }
}

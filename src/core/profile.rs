//! Env file lookup for a named environment.
//!
//! Applications select their env file with `ENV`. When `.env` is a directory
//! the file is `.env/<env>.env`, with short aliases (`dev`, `prod`, ...) and
//! any `<name>.env` already in the directory accepted as names. When `.env`
//! is a plain file it is used whatever the environment.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::core::constants::{DEFAULT_PROFILE, ENV_DIR, ENV_FILE_EXT, PROFILE_VAR};
use crate::core::domain::EnvFile;
use crate::error::{ProfileError, Result};

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("dev", "development"),
    ("prod", "production"),
    ("stag", "staging"),
    ("local", "localhost"),
    ("development", "development"),
    ("production", "production"),
    ("staging", "staging"),
    ("localhost", "localhost"),
];

/// Environment named by `ENV`, or `development`.
pub fn current_env() -> String {
    std::env::var(PROFILE_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

/// Accepted environment names and the file stem each maps to.
///
/// # Errors
///
/// Returns error if the env directory cannot be listed.
pub fn aliases(env_dir: &Path) -> Result<IndexMap<String, String>> {
    let mut aliases: IndexMap<String, String> = BUILTIN_ALIASES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for entry in std::fs::read_dir(env_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ENV_FILE_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            aliases.insert(stem.to_string(), stem.to_string());
        }
    }

    Ok(aliases)
}

/// Locate the env file for `env` under `root`.
///
/// # Errors
///
/// Returns `ProfileError::UnknownEnv` for a name with no alias and
/// `ProfileError::Missing` if the resolved file does not exist.
pub fn locate(root: &Path, env: &str) -> Result<PathBuf> {
    let env_path = root.join(ENV_DIR);

    let path = if env_path.is_dir() {
        let aliases = aliases(&env_path)?;
        let Some(target) = aliases.get(env) else {
            let choices = aliases.keys().cloned().collect::<Vec<_>>().join(", ");
            return Err(ProfileError::UnknownEnv {
                env: env.to_string(),
                choices,
            }
            .into());
        };
        env_path.join(format!("{}.{}", target, ENV_FILE_EXT))
    } else {
        env_path
    };

    if !path.exists() {
        return Err(ProfileError::Missing(path.display().to_string()).into());
    }

    debug!(env, path = %path.display(), "env file located");
    Ok(path)
}

/// Locate and parse the env file for `env`.
pub fn load(root: &Path, env: &str) -> Result<EnvFile> {
    EnvFile::load(locate(root, env)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn with_env_dir(files: &[(&str, &str)]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".env");
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        tmp
    }

    #[test]
    fn test_alias_resolves_to_full_name() {
        let tmp = with_env_dir(&[("production.env", "A=1\n")]);
        let path = locate(tmp.path(), "prod").unwrap();
        assert_eq!(path, tmp.path().join(".env").join("production.env"));
    }

    #[test]
    fn test_custom_file_is_an_alias() {
        let tmp = with_env_dir(&[("qa.env", "A=1\n")]);
        let env = load(tmp.path(), "qa").unwrap();
        assert_eq!(env.get("A"), Some("1"));
    }

    #[test]
    fn test_unknown_env_lists_choices() {
        let tmp = with_env_dir(&[("qa.env", "")]);
        let err = locate(tmp.path(), "nope").unwrap_err();
        match err {
            Error::Profile(ProfileError::UnknownEnv { env, choices }) => {
                assert_eq!(env, "nope");
                assert!(choices.contains("development"));
                assert!(choices.contains("qa"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_known_alias_without_file_is_missing() {
        let tmp = with_env_dir(&[]);
        let err = locate(tmp.path(), "staging").unwrap_err();
        assert!(matches!(err, Error::Profile(ProfileError::Missing(_))));
    }

    #[test]
    fn test_plain_env_file_is_used_for_any_env() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "A=1\n").unwrap();

        let path = locate(tmp.path(), "anything").unwrap();
        assert_eq!(path, tmp.path().join(".env"));
    }

    #[test]
    fn test_nothing_there() {
        let tmp = TempDir::new().unwrap();
        let err = locate(tmp.path(), "development").unwrap_err();
        assert!(matches!(err, Error::Profile(ProfileError::Missing(_))));
    }
}

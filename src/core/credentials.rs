//! AWS credential resolution.
//!
//! Credentials come from the environment, then `~/.aws/credentials`, then an
//! interactive prompt. Anything wrong with the file (missing, unreadable,
//! incomplete) falls through to the prompt without being reported.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{
    ACCESS_KEY_FIELD, ACCESS_KEY_VAR, CREDENTIALS_FILE, CREDENTIALS_PROFILE, SECRET_KEY_FIELD,
    SECRET_KEY_VAR,
};
use crate::error::{AuthError, Result};

/// An access key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: Zeroizing<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: Zeroizing::new(secret_access_key.into()),
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Parse the contents of a credentials file.
    ///
    /// Reads `aws_access_key_id=` and `aws_secret_access_key=` lines; a key
    /// that appears more than once keeps its last value. Returns `None` if
    /// either value is missing or empty.
    pub fn parse(contents: &str) -> Option<Self> {
        let mut access = "";
        let mut secret = "";

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                ACCESS_KEY_FIELD => access = value.trim(),
                SECRET_KEY_FIELD => secret = value.trim(),
                _ => {}
            }
        }

        if access.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self::new(access, secret))
    }

    /// Credentials file contents for this pair.
    pub fn render(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "{}\n{}={}\n{}={}\n",
            CREDENTIALS_PROFILE,
            ACCESS_KEY_FIELD,
            self.access_key_id,
            SECRET_KEY_FIELD,
            self.secret_access_key.as_str()
        ))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Interactive input for credentials nobody configured.
pub trait Prompter {
    /// Explain how to obtain an access key.
    fn guidance(&self);

    /// Ask for a visible value.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Ask for a hidden value.
    fn password(&self, prompt: &str) -> Result<String>;

    /// Report where new credentials were saved.
    fn stored(&self, _path: &Path) {}
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Resolves credentials through env, file and prompt.
pub struct CredentialResolver {
    path: PathBuf,
    prompter: Option<Box<dyn Prompter>>,
    env: EnvLookup,
}

impl CredentialResolver {
    /// Resolver for an explicit credentials file, non-interactive.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            prompter: None,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Resolver for `~/.aws/credentials`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoHomeDir` if HOME cannot be determined.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AuthError::NoHomeDir)?;
        Ok(Self::new(home.join(CREDENTIALS_FILE)))
    }

    /// Allow prompting. Without a prompter, missing credentials are an error.
    pub fn interactive(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    /// Replace the environment lookup.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(lookup);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_interactive(&self) -> bool {
        self.prompter.is_some()
    }

    /// Resolve credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` when nothing is configured and
    /// prompting is not allowed, or any I/O error from persisting prompted
    /// credentials.
    pub fn resolve(&self) -> Result<Credentials> {
        if let Some(credentials) = self.from_env() {
            debug!(source = "env", "credentials resolved");
            return Ok(credentials);
        }

        if let Some(credentials) = self.from_file() {
            debug!(source = "file", path = %self.path.display(), "credentials resolved");
            return Ok(credentials);
        }

        self.prompt()
    }

    fn from_env(&self) -> Option<Credentials> {
        let access = (self.env)(ACCESS_KEY_VAR).filter(|v| !v.is_empty())?;
        let secret = (self.env)(SECRET_KEY_VAR).filter(|v| !v.is_empty())?;
        Some(Credentials::new(access, secret))
    }

    fn from_file(&self) -> Option<Credentials> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => Zeroizing::new(contents),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "credentials file unavailable");
                return None;
            }
        };

        let credentials = Credentials::parse(&contents);
        if credentials.is_none() {
            debug!(path = %self.path.display(), "credentials file incomplete");
        }
        credentials
    }

    fn prompt(&self) -> Result<Credentials> {
        let Some(prompter) = &self.prompter else {
            return Err(AuthError::MissingCredentials.into());
        };

        prompter.guidance();
        let access = prompter.input("Access key ID")?;
        let secret = prompter.password("Secret access key")?;
        let credentials = Credentials::new(access.trim(), secret.trim());

        persist(&self.path, &credentials)?;
        prompter.stored(&self.path);

        Ok(credentials)
    }
}

/// Write credentials to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns error if the directory or file cannot be written.
pub fn persist(path: &Path, credentials: &Credentials) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    fs::write(path, credentials.render().as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    debug!(path = %path.display(), "credentials persisted");
    Ok(())
}

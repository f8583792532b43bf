//! EnvFile type.
//!
//! A `.env` file materialized from parameter values, with typed access.

#[cfg(unix)]
use std::io::Write;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::EnvMap;
use crate::error::Result;

/// A `.env` file: ordered `NAME=value` entries bound to a path.
#[derive(Debug, Clone)]
pub struct EnvFile {
    entries: EnvMap,
    path: PathBuf,
}

impl EnvFile {
    /// Parse an env file from disk.
    ///
    /// Blank and `#` lines are ignored and quoted values are unquoted. A
    /// variable written twice keeps its first position and its last value.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        Ok(Self {
            entries: parse(&contents),
            path: path.to_path_buf(),
        })
    }

    /// Create from an ordered mapping.
    pub fn from_map(entries: EnvMap, path: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            path: path.into(),
        }
    }

    /// Render the file contents: one `NAME=value` line per entry.
    ///
    /// Values containing whitespace, `#`, `=`, quotes or backslashes are
    /// double-quoted and escaped.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, quote(value)))
            .collect()
    }

    /// Write the file, creating parent directories first.
    ///
    /// Existing content is replaced, never merged.
    ///
    /// # Errors
    ///
    /// Returns error if a directory or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(dir = %parent.display(), "creating env directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = self.render();

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(&self.path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            // An existing file keeps its old mode on open.
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(&self.path, content)?;
        }

        debug!(path = %self.path.display(), entries = self.entries.len(), "env file written");
        Ok(())
    }

    /// Value of one variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Variables in the order they are written.
    pub fn entries(&self) -> &EnvMap {
        &self.entries
    }

    pub fn into_entries(self) -> EnvMap {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for EnvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn parse(contents: &str) -> EnvMap {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim())))
        .collect()
}

/// Characters that force a value into double quotes.
fn is_special(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '#' | '=' | '"' | '\'' | '\\')
}

/// Render a value for the right-hand side of `NAME=value`.
fn quote(value: &str) -> Cow<'_, str> {
    if !value.chars().any(is_special) {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(ch);
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Inverse of [`quote`]. Single-quoted values are taken literally.
fn unquote(raw: &str) -> String {
    let inner = |q: char| {
        raw.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|_| raw.len() >= 2)
    };

    if let Some(literal) = inner('\'') {
        return literal.to_string();
    }
    let Some(body) = inner('"') else {
        return raw.to_string();
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(escaped @ ('"' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

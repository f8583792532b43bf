//! Parameter type.
//!
//! A single value in the parameter store, as written or as read back.

use serde::Serialize;

use crate::core::constants::LIST_SEPARATOR;
use crate::core::name;
use crate::error::{Result, ValidationError};

/// Storage type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    String,
    SecureString,
    StringList,
}

impl ParameterKind {
    /// Name used by the store API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::SecureString => "SecureString",
            Self::StringList => "StringList",
        }
    }

    /// Parse the store API name. Unknown names are treated as plain strings.
    pub fn from_api(name: &str) -> Self {
        match name {
            "SecureString" => Self::SecureString,
            "StringList" => Self::StringList,
            _ => Self::String,
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter value: one string, or an ordered list stored comma-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Text(String),
    List(Vec<String>),
}

impl ParameterValue {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Wire form of the value.
    pub fn encode(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(&LIST_SEPARATOR.to_string()),
        }
    }

    /// Decode a wire value read back with the given kind.
    pub fn decode(raw: &str, kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::StringList => Self::List(
                raw.split(LIST_SEPARATOR)
                    .map(|s| s.to_string())
                    .collect(),
            ),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for ParameterValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A parameter with its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: ParameterValue,
    secret: bool,
    description: Option<String>,
    key_id: Option<String>,
    scope: Option<String>,
    overwrite: bool,
    arn: Option<String>,
    version: Option<i64>,
}

impl Parameter {
    /// Create a plain parameter.
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            secret: false,
            description: None,
            key_id: None,
            scope: None,
            overwrite: false,
            arn: None,
            version: None,
        }
    }

    /// Mark the parameter for encryption.
    pub fn with_secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Explicit KMS key id, skipping the `/<env>/KMS_KEY_ID` lookup.
    pub fn with_key_id(mut self, key_id: Option<String>) -> Self {
        self.key_id = key_id;
        self
    }

    /// Environment scope used to find the encryption key.
    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }

    /// Replace an existing parameter instead of failing.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Attach metadata returned by the store.
    pub fn with_metadata(mut self, arn: Option<String>, version: Option<i64>) -> Self {
        self.arn = arn;
        self.version = version;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last path segment of the name.
    pub fn short_name(&self) -> &str {
        name::short_name(&self.name)
    }

    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    pub fn is_secret(&self) -> bool {
        self.secret
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn version(&self) -> Option<i64> {
        self.version
    }

    /// Depth of the name in the hierarchy.
    pub fn depth(&self) -> usize {
        self.name.split('/').filter(|s| !s.is_empty()).count()
    }

    /// Storage type for this parameter.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EncryptedList` for a secret list.
    pub fn kind(&self) -> Result<ParameterKind> {
        match (self.secret, self.value.is_list()) {
            (true, true) => Err(ValidationError::EncryptedList(self.name.clone()).into()),
            (true, false) => Ok(ParameterKind::SecureString),
            (false, true) => Ok(ParameterKind::StringList),
            (false, false) => Ok(ParameterKind::String),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

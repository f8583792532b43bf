//! Error types for ssmenv.
//!
//! Errors are grouped by the layer that raises them. Every variant maps to a
//! process exit code through [`Error::exit_code`], so embedded callers get the
//! same information the CLI prints.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    EnvList(#[from] EnvListError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Malformed user input. Raised before anything touches the network.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid variable name '{name}': must start with `/` for a root variable, or provide --env")]
    InvalidName { name: String },

    #[error("value missing for '{0}': pass it as an argument or use NAME=value")]
    MissingValue(String),

    #[error("only strings can be encrypted: '{0}' is a list")]
    EncryptedList(String),

    #[error("invalid batch size {0}: must be between 1 and {max}", max = crate::core::constants::MAX_BATCH_SIZE)]
    InvalidBatchSize(usize),
}

/// Failures talking to the parameter store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter not found [{0}]")]
    NotFound(String),

    #[error("encryption key not found for env [{0}]")]
    EncryptionKeyNotFound(String),

    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(std::io::Error),
}

/// Credential resolution failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("unable to find `AWS_ACCESS_KEY_ID` and/or `AWS_SECRET_ACCESS_KEY`")]
    MissingCredentials,

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("credential prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Problems with the `.envList` input file.
#[derive(Error, Debug)]
pub enum EnvListError {
    #[error("env list file not found at location: {0}")]
    NotFound(String),

    #[error("env list file is empty: {0}")]
    Empty(String),
}

/// Problems locating a materialized env file for `run`.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("invalid ENV '{env}'. Choose one of [{choices}], or add '{env}.env' inside the env directory")]
    UnknownEnv { env: String, choices: String },

    #[error("env file not found [{0}]")]
    Missing(String),
}

/// `.ssmenv.toml` errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),
}

impl Error {
    /// Response code carried by this error.
    ///
    /// Lookups that miss report the store's `404`. Everything else is `1`.
    pub fn code(&self) -> u16 {
        match self {
            Error::Store(StoreError::NotFound(_)) => 404,
            _ => 1,
        }
    }

    /// Exit code for the process boundary.
    ///
    /// Exit statuses are 8-bit, so a `404` lookup miss exits with `4`.
    pub fn exit_code(&self) -> i32 {
        match self.code() {
            404 => 4,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Auth(AuthError::Prompt(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

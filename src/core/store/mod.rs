//! Parameter store backends.
//!
//! The [`ParameterStore`] trait is the seam between ssmenv and the remote
//! key-value service. `Ssm` talks to AWS Systems Manager; `Memory` keeps
//! everything in process and records each call.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::{Parameter, ParameterKind};
use crate::error::Result;

mod memory;
mod ssm;

pub use memory::{Memory, StoreCall};
pub use ssm::Ssm;

/// A fully-validated write, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    pub name: String,
    /// Wire value (lists already comma-joined)
    pub value: String,
    pub kind: ParameterKind,
    pub description: Option<String>,
    /// KMS key for `SecureString` values
    pub key_id: Option<String>,
    pub overwrite: bool,
}

/// Result of one batch read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Parameters the store returned
    pub found: Vec<Parameter>,
    /// Requested names the store could not resolve
    pub invalid: Vec<String>,
}

/// Remote parameter store.
///
/// Every read decrypts secure values. Implementations do not retry.
pub trait ParameterStore {
    /// Fetch one parameter.
    ///
    /// # Returns
    ///
    /// `None` when the store has no parameter with that name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Request` for any other failure.
    fn get(&self, name: &str) -> Result<Option<Parameter>>;

    /// Fetch several parameters in a single call.
    ///
    /// Unknown names are reported in `BatchResult::invalid`, not as errors.
    fn get_many(&self, names: &[String]) -> Result<BatchResult>;

    /// Create or overwrite a parameter.
    fn put(&self, request: &PutRequest) -> Result<()>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

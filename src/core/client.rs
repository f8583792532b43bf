//! Typed parameter operations over a [`ParameterStore`].

use tracing::{debug, warn};

use crate::core::constants::{KMS_KEY_PARAMETER, MAX_PATH_DEPTH};
use crate::core::domain::{Parameter, ParameterKind};
use crate::core::store::{BatchResult, ParameterStore, PutRequest};
use crate::error::{Result, StoreError};

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Parameter),
    NotFound(String),
}

impl Lookup {
    /// Response code: 200 when found, 404 otherwise.
    pub fn code(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::NotFound(_) => 404,
        }
    }

    pub fn found(&self) -> Option<&Parameter> {
        match self {
            Self::Found(param) => Some(param),
            Self::NotFound(_) => None,
        }
    }

    /// Turn a miss into `StoreError::NotFound`.
    pub fn into_result(self) -> Result<Parameter> {
        match self {
            Self::Found(param) => Ok(param),
            Self::NotFound(name) => Err(StoreError::NotFound(name).into()),
        }
    }
}

/// Parameter operations: get, batch get, validated put, sequential put.
pub struct ParameterClient<S> {
    store: S,
}

impl<S: ParameterStore> ParameterClient<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch one parameter, decrypted.
    pub fn get(&self, name: &str) -> Result<Lookup> {
        debug!(name, store = self.store.name(), "get parameter");

        Ok(match self.store.get(name)? {
            Some(param) => Lookup::Found(param),
            None => Lookup::NotFound(name.to_string()),
        })
    }

    /// Fetch one batch of parameters in a single request.
    ///
    /// Names the store does not know are returned in `invalid`; that is not
    /// an error.
    pub fn get_batch(&self, names: &[String]) -> Result<BatchResult> {
        let result = self.store.get_many(names)?;
        debug!(
            requested = names.len(),
            found = result.found.len(),
            invalid = result.invalid.len(),
            "batch fetched"
        );
        Ok(result)
    }

    /// Store a parameter.
    ///
    /// Secure strings are encrypted with the parameter's own key id, or the
    /// key stored at `/<env>/KMS_KEY_ID`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EncryptedList` for a secret list, before any request
    /// - `StoreError::EncryptionKeyNotFound` when no key can be resolved
    /// - `StoreError::Request` when the store rejects the write
    pub fn put(&self, param: &Parameter) -> Result<()> {
        let kind = param.kind()?;

        if param.depth() > MAX_PATH_DEPTH {
            warn!(
                name = param.name(),
                depth = param.depth(),
                "name exceeds the store's hierarchy depth"
            );
        }

        let key_id = match kind {
            ParameterKind::SecureString => Some(match param.key_id() {
                Some(key) => key.to_string(),
                None => self.encryption_key(param.scope())?,
            }),
            _ => None,
        };

        debug!(name = param.name(), %kind, "put parameter");

        self.store.put(&PutRequest {
            name: param.name().to_string(),
            value: param.value().encode(),
            kind,
            description: param.description().map(str::to_string),
            key_id,
            overwrite: param.overwrite(),
        })
    }

    /// Store parameters one after another.
    ///
    /// Stops at the first failure; later parameters are not attempted.
    ///
    /// # Returns
    ///
    /// Number of parameters written.
    pub fn put_sequential(&self, params: &[Parameter]) -> Result<usize> {
        for (index, param) in params.iter().enumerate() {
            debug!(index, total = params.len(), name = param.name(), "sequential put");
            self.put(param)?;
        }
        Ok(params.len())
    }

    /// KMS key id for an environment, read from `/<env>/KMS_KEY_ID`.
    pub fn encryption_key(&self, scope: Option<&str>) -> Result<String> {
        let Some(scope) = scope.filter(|s| !s.is_empty()) else {
            return Err(StoreError::EncryptionKeyNotFound("root".to_string()).into());
        };

        match self.get(&format!("/{}/{}", scope, KMS_KEY_PARAMETER))? {
            Lookup::Found(param) => Ok(param.value().encode()),
            Lookup::NotFound(_) => Err(StoreError::EncryptionKeyNotFound(scope.to_string()).into()),
        }
    }
}

//! Per-invocation connection state.
//!
//! Credentials are resolved and the store client is built at most once, on
//! first use. Commands that fail validation never trigger either.

use std::cell::OnceCell;

use crate::core::client::ParameterClient;
use crate::core::credentials::{CredentialResolver, Credentials};
use crate::core::store::Ssm;
use crate::error::Result;

/// Lazily connected parameter store session.
pub struct Session {
    resolver: CredentialResolver,
    region: String,
    credentials: OnceCell<Credentials>,
    client: OnceCell<ParameterClient<Ssm>>,
}

impl Session {
    pub fn new(resolver: CredentialResolver, region: impl Into<String>) -> Self {
        Self {
            resolver,
            region: region.into(),
            credentials: OnceCell::new(),
            client: OnceCell::new(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Resolved credentials, prompting at most once.
    pub fn credentials(&self) -> Result<&Credentials> {
        if let Some(credentials) = self.credentials.get() {
            return Ok(credentials);
        }
        let credentials = self.resolver.resolve()?;
        Ok(self.credentials.get_or_init(|| credentials))
    }

    /// Client for the configured region.
    pub fn client(&self) -> Result<&ParameterClient<Ssm>> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let store = Ssm::connect(self.credentials()?, &self.region)?;
        Ok(self.client.get_or_init(|| ParameterClient::new(store)))
    }
}

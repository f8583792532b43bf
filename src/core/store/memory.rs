//! In-process parameter store.
//!
//! Keeps parameters in a map and records every call in order. Useful for
//! tests and dry runs; behaves like the remote store for not-found and
//! already-exists cases.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{BatchResult, ParameterStore, PutRequest};
use crate::core::domain::{Parameter, ParameterKind, ParameterValue};
use crate::error::{Result, StoreError};

/// A call made against a [`Memory`] store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Get(String),
    GetMany(Vec<String>),
    Put(PutRequest),
}

/// In-memory parameter store.
#[derive(Debug, Default)]
pub struct Memory {
    params: RefCell<BTreeMap<String, Parameter>>,
    calls: RefCell<Vec<StoreCall>>,
    failing: BTreeSet<String>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a parameter.
    pub fn with(self, param: Parameter) -> Self {
        self.insert(param);
        self
    }

    /// Make requests touching `name` fail with a request error.
    pub fn failing_on(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    pub fn insert(&self, param: Parameter) {
        self.params
            .borrow_mut()
            .insert(param.name().to_string(), param);
    }

    /// Stored parameter by name.
    pub fn stored(&self, name: &str) -> Option<Parameter> {
        self.params.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.params.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.borrow().is_empty()
    }

    /// All calls made so far, oldest first.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Name lists of every batch read, in order.
    pub fn batches(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                StoreCall::GetMany(names) => Some(names.clone()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, operation: &'static str, name: &str) -> Result<()> {
        if self.failing.contains(name) {
            return Err(StoreError::Request {
                operation,
                message: format!("injected failure for {}", name),
            }
            .into());
        }
        Ok(())
    }
}

impl ParameterStore for Memory {
    fn get(&self, name: &str) -> Result<Option<Parameter>> {
        self.calls.borrow_mut().push(StoreCall::Get(name.to_string()));
        self.check("GetParameter", name)?;
        Ok(self.stored(name))
    }

    fn get_many(&self, names: &[String]) -> Result<BatchResult> {
        self.calls
            .borrow_mut()
            .push(StoreCall::GetMany(names.to_vec()));

        let mut result = BatchResult::default();
        for name in names {
            self.check("GetParameters", name)?;
            match self.stored(name) {
                Some(param) => result.found.push(param),
                None => result.invalid.push(name.clone()),
            }
        }
        Ok(result)
    }

    fn put(&self, request: &PutRequest) -> Result<()> {
        self.calls.borrow_mut().push(StoreCall::Put(request.clone()));
        self.check("PutParameter", &request.name)?;

        if !request.overwrite && self.params.borrow().contains_key(&request.name) {
            return Err(StoreError::Request {
                operation: "PutParameter",
                message: format!("ParameterAlreadyExists: {}", request.name),
            }
            .into());
        }

        let value = ParameterValue::decode(&request.value, request.kind);
        let version = self
            .params
            .borrow()
            .get(&request.name)
            .and_then(|p| p.version())
            .unwrap_or(0)
            + 1;
        let param = Parameter::new(request.name.clone(), value)
            .with_secret(request.kind == ParameterKind::SecureString)
            .with_description(request.description.clone())
            .with_key_id(request.key_id.clone())
            .with_metadata(None, Some(version));

        self.insert(param);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

//! AWS Systems Manager Parameter Store backend.
//!
//! The SDK is async; each call is driven to completion on a private
//! current-thread runtime, so requests are issued strictly one at a time.

use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::{Credentials as SdkCredentials, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::{Parameter as SdkParameter, ParameterType};
use aws_sdk_ssm::Client;
use tracing::{debug, trace};

use super::{BatchResult, ParameterStore, PutRequest};
use crate::core::credentials::Credentials;
use crate::core::domain::{Parameter, ParameterKind, ParameterValue};
use crate::error::{Result, StoreError};

/// Parameter Store client bound to one region and one set of credentials.
pub struct Ssm {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl Ssm {
    /// Build a client for `region` using static credentials.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start.
    pub fn connect(credentials: &Credentials, region: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let provider = SdkCredentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            None,
            None,
            "ssmenv",
        );

        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .credentials_provider(provider)
                .load(),
        );

        debug!(region, "parameter store client ready");

        Ok(Self {
            runtime,
            client: Client::new(&config),
        })
    }
}

impl ParameterStore for Ssm {
    fn get(&self, name: &str) -> Result<Option<Parameter>> {
        trace!(name, "GetParameter");

        let result = self.runtime.block_on(
            self.client
                .get_parameter()
                .name(name)
                .with_decryption(true)
                .send(),
        );

        match result {
            Ok(output) => Ok(output.parameter().map(convert)),
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_parameter_not_found())
                {
                    return Ok(None);
                }
                Err(request_error("GetParameter", &err))
            }
        }
    }

    fn get_many(&self, names: &[String]) -> Result<BatchResult> {
        trace!(count = names.len(), "GetParameters");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters()
                    .set_names(Some(names.to_vec()))
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| request_error("GetParameters", &e))?;

        Ok(BatchResult {
            found: output.parameters().iter().map(convert).collect(),
            invalid: output.invalid_parameters().to_vec(),
        })
    }

    fn put(&self, request: &PutRequest) -> Result<()> {
        trace!(name = %request.name, kind = %request.kind, "PutParameter");

        let kind = match request.kind {
            ParameterKind::String => ParameterType::String,
            ParameterKind::SecureString => ParameterType::SecureString,
            ParameterKind::StringList => ParameterType::StringList,
        };

        let output = self
            .runtime
            .block_on(
                self.client
                    .put_parameter()
                    .name(&request.name)
                    .value(&request.value)
                    .r#type(kind)
                    .data_type("text")
                    .set_description(request.description.clone())
                    .set_key_id(request.key_id.clone())
                    .overwrite(request.overwrite)
                    .send(),
            )
            .map_err(|e| request_error("PutParameter", &e))?;

        debug!(name = %request.name, version = output.version(), "parameter stored");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ssm"
    }
}

fn convert(param: &SdkParameter) -> Parameter {
    let kind = param
        .r#type()
        .map(|t| ParameterKind::from_api(t.as_str()))
        .unwrap_or(ParameterKind::String);
    let value = ParameterValue::decode(param.value().unwrap_or_default(), kind);

    Parameter::new(param.name().unwrap_or_default(), value)
        .with_secret(kind == ParameterKind::SecureString)
        .with_metadata(param.arn().map(str::to_string), Some(param.version()))
}

fn request_error(operation: &'static str, err: &dyn std::error::Error) -> crate::error::Error {
    StoreError::Request {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
    .into()
}

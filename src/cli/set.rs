//! Set command.
//!
//! Accepts `set NAME value` or `set NAME=value`. When both are given the
//! assignment wins.

use clap::Args;
use tracing::{debug, warn};

use crate::cli::output;
use crate::core::constants::LIST_SEPARATOR;
use crate::core::domain::{Parameter, ParameterValue};
use crate::core::name;
use crate::core::session::Session;
use crate::error::{Result, ValidationError};

/// Arguments for `ssmenv set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Variable name, or NAME=value
    pub name: String,
    /// Value to store
    pub value: Option<String>,
    /// Environment prefix for relative names
    #[arg(short, long)]
    pub env: Option<String>,
    /// Description stored with the parameter
    #[arg(short, long)]
    pub description: Option<String>,
    /// Store as SecureString
    #[arg(short = 'x', long)]
    pub encrypt: bool,
    /// KMS key id [default: value of /<env>/KMS_KEY_ID]
    #[arg(long, requires = "encrypt")]
    pub key_id: Option<String>,
    /// Store a comma-separated value as a StringList
    #[arg(short, long)]
    pub list: bool,
    /// Overwrite an existing parameter
    #[arg(short, long)]
    pub force: bool,
}

impl SetArgs {
    /// Build the parameter to write. Fails without touching the network.
    pub fn parameter(self) -> Result<Parameter> {
        // NAME=value takes precedence over a positional value.
        let (raw_name, raw_value) = match (name::split_assignment(&self.name), &self.value) {
            (Some(assignment), extra) => {
                if extra.is_some() {
                    warn!(name = %self.name, "value given twice, ignoring the positional value");
                }
                assignment
            }
            (None, Some(value)) => (self.name.as_str(), value.as_str()),
            (None, None) => return Err(ValidationError::MissingValue(self.name.clone()).into()),
        };
        if raw_value.is_empty() {
            return Err(ValidationError::MissingValue(raw_name.to_string()).into());
        }

        let resolved = name::resolve(raw_name, self.env.as_deref())?;
        let value = if self.list {
            ParameterValue::List(
                raw_value
                    .split(LIST_SEPARATOR)
                    .map(|s| s.trim().to_string())
                    .collect(),
            )
        } else {
            ParameterValue::from(raw_value)
        };

        let param = Parameter::new(resolved.into_path(), value)
            .with_secret(self.encrypt)
            .with_description(self.description)
            .with_key_id(self.key_id)
            .with_scope(self.env)
            .with_overwrite(self.force);
        param.kind()?;
        Ok(param)
    }
}

/// Store one parameter.
pub fn execute(session: &Session, args: SetArgs) -> Result<()> {
    let param = args.parameter()?;
    debug!(name = param.name(), secret = param.is_secret(), "adding variable");

    session.client()?.put(&param)?;

    output::success(&format!(
        "Parameter created successfully [{}]",
        output::key(param.name())
    ));
    Ok(())
}

//! Get command.

use serde::Serialize;

use crate::core::domain::{Parameter, ParameterKind};
use crate::core::name;
use crate::core::session::Session;
use crate::error::Result;

#[derive(Serialize)]
struct GetOutput<'a> {
    name: &'a str,
    value: String,
    #[serde(rename = "type")]
    kind: ParameterKind,
    arn: Option<&'a str>,
    version: Option<i64>,
}

impl<'a> GetOutput<'a> {
    fn new(param: &'a Parameter) -> Result<Self> {
        Ok(Self {
            name: param.name(),
            value: param.value().encode(),
            kind: param.kind()?,
            arn: param.arn(),
            version: param.version(),
        })
    }
}

/// Fetch one parameter and print its value.
pub fn execute(session: &Session, name: &str, env: Option<&str>, json: bool) -> Result<()> {
    let resolved = name::resolve(name, env)?;
    let param = session.client()?.get(resolved.path())?.into_result()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&GetOutput::new(&param)?)?);
    } else {
        println!("{}", param.value());
    }

    Ok(())
}

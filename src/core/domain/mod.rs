//! Domain types.

mod env;
mod parameter;

pub use env::EnvFile;
pub use parameter::{Parameter, ParameterKind, ParameterValue};

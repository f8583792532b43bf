//! Core library components.
//!
//! Everything here is independent of the terminal: name resolution, the
//! parameter store seam, credentials, batching and env file handling.

pub mod batch;
pub mod client;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod domain;
pub mod env_list;
pub mod name;
pub mod populate;
pub mod profile;
pub mod session;
pub mod store;
pub mod types;

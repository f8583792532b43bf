//! ssmenv - AWS SSM Parameter Store variables as .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Print one parameter
//! │   ├── set           # Store one parameter
//! │   ├── populate      # Env list -> .env/<env>.env
//! │   ├── import        # .env file -> parameters
//! │   ├── run           # Run with an env file injected
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── name          # Variable name resolution
//!     ├── credentials   # Env, credentials file, prompt
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── ssm       # AWS SSM implementation
//!     │   └── memory    # In-memory implementation
//!     ├── client        # Typed get / put / sequential put
//!     ├── batch         # Batched fetching
//!     ├── env_list      # .envList parsing
//!     ├── populate      # Fetch, merge, write
//!     ├── profile       # ENV -> env file lookup
//!     ├── session       # Lazily connected client
//!     └── config        # .ssmenv.toml
//! ```
//!
//! The library can be embedded without the CLI: build a
//! [`core::client::ParameterClient`] over any [`core::store::ParameterStore`]
//! and errors come back as [`error::Error`] with a response code instead of
//! exiting the process.

pub mod cli;
pub mod core;
pub mod error;

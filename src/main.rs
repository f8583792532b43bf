//! ssmenv - AWS SSM Parameter Store variables as .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssmenv::cli::output;
use ssmenv::cli::{execute, Cli};
use ssmenv::error::{AuthError, EnvListError, Error, ProfileError, StoreError, ValidationError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("SSMENV_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ssmenv=debug")
        } else {
            EnvFilter::new("ssmenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        output::info(&format!("Process exited with error code: [{}]", e.code()));
        std::process::exit(e.exit_code());
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Store(StoreError::NotFound(_)) => Some("check the name, or pass --env for a relative name"),
        Error::Store(StoreError::EncryptionKeyNotFound(_)) => {
            Some("store the key id as /<env>/KMS_KEY_ID, or pass --key-id")
        }
        Error::Auth(AuthError::MissingCredentials) => {
            Some("export AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY, or run interactively")
        }
        Error::Validation(ValidationError::InvalidName { .. }) => {
            Some("use /NAME for a root variable or pass --env")
        }
        Error::EnvList(EnvListError::NotFound(_)) => Some("create .envList or pass --file"),
        Error::Profile(ProfileError::Missing(_)) => Some("run: ssmenv populate --env <env>"),
        _ => None,
    }
}

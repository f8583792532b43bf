//! Command-line interface.

pub mod completions;
pub mod get;
pub mod import;
pub mod output;
pub mod populate;
pub mod prompt;
pub mod run;
pub mod set;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::credentials::CredentialResolver;
use crate::core::session::Session;
use crate::error::Result;

/// ssmenv - AWS SSM Parameter Store variables as .env files.
#[derive(Parser)]
#[command(
    name = "ssmenv",
    about = "Manage AWS SSM parameters and materialize them as .env files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AWS region (defaults to AWS_DEFAULT_REGION, then .ssmenv.toml)
    #[arg(long, global = true)]
    pub region: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a parameter value
    #[command(visible_alias = "getKey")]
    Get {
        /// Variable name; must start with `/` unless --env is given
        name: String,
        /// Environment prefix for relative names
        #[arg(short, long)]
        env: Option<String>,
        /// Print name, value, type, arn and version as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store a parameter
    #[command(visible_alias = "setKey")]
    Set(set::SetArgs),

    /// Write an env file from the parameters named in an env list
    #[command(visible_alias = "populateEnv")]
    Populate {
        /// Environment to populate
        #[arg(short, long)]
        env: String,
        /// Env list file [default: .envList]
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output file [default: .env/<env>.env]
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Names per request, 1 to 10 [default: 10]
        #[arg(long)]
        batch_size: Option<usize>,
    },

    /// Store every entry of a .env file under an environment
    Import {
        /// Path to .env file
        path: PathBuf,
        /// Environment to write to
        #[arg(short, long)]
        env: String,
        /// Store values as SecureString
        #[arg(short = 'x', long)]
        encrypt: bool,
        /// Overwrite existing parameters
        #[arg(short, long)]
        force: bool,
    },

    /// Run a command with an env file's variables injected
    Run {
        /// Environment whose env file to load
        #[arg(short, long, env = "ENV")]
        env: Option<String>,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    let region = cli.region.as_deref();

    match cli.command {
        Command::Get { name, env, json } => {
            let (_, session) = context(region)?;
            get::execute(&session, &name, env.as_deref(), json)
        }
        Command::Set(args) => {
            let (_, session) = context(region)?;
            set::execute(&session, args)
        }
        Command::Populate {
            env,
            file,
            out,
            batch_size,
        } => {
            let (config, session) = context(region)?;
            populate::execute(&session, &config, &env, file, out, batch_size)
        }
        Command::Import {
            path,
            env,
            encrypt,
            force,
        } => {
            let (_, session) = context(region)?;
            import::execute(&session, &path, &env, encrypt, force)
        }
        Command::Run { env, command } => run::execute(env.as_deref(), &command),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Project config and a session for this invocation.
///
/// Credentials are prompted for only when stdin is a terminal.
fn context(region: Option<&str>) -> Result<(Config, Session)> {
    let config = Config::load()?;
    let mut resolver = CredentialResolver::from_home()?;
    if io::stdin().is_terminal() {
        resolver = resolver.interactive(Box::new(prompt::TerminalPrompter));
    }
    let session = Session::new(resolver, config.region(region));
    Ok((config, session))
}

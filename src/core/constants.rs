//! Constants used throughout ssmenv.
//!
//! Centralizes file names, environment variable names and store limits.

/// Default input list of variable names (`.envList`).
pub const ENV_LIST_FILE: &str = ".envList";

/// Directory holding materialized env files (`.env/<env>.env`).
pub const ENV_DIR: &str = ".env";

/// Extension of materialized env files.
pub const ENV_FILE_EXT: &str = "env";

/// Optional project configuration file.
pub const CONFIG_FILE: &str = ".ssmenv.toml";

/// AWS credentials file relative to HOME.
pub const CREDENTIALS_FILE: &str = ".aws/credentials";

/// Profile header written to the credentials file.
pub const CREDENTIALS_PROFILE: &str = "[default]";

/// Credentials file key for the access key id.
pub const ACCESS_KEY_FIELD: &str = "aws_access_key_id";

/// Credentials file key for the secret access key.
pub const SECRET_KEY_FIELD: &str = "aws_secret_access_key";

/// Environment variable holding the access key id.
pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key.
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the region.
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Region used when nothing else is configured.
pub const DEFAULT_REGION: &str = "ap-south-1";

/// Environment variable selecting the profile loaded by `ssmenv run`.
pub const PROFILE_VAR: &str = "ENV";

/// Profile used when `ENV` is unset.
pub const DEFAULT_PROFILE: &str = "development";

/// Names fetched per `GetParameters` call.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Hard limit of the store's batch API.
pub const MAX_BATCH_SIZE: usize = 10;

/// Deepest hierarchy the store accepts.
pub const MAX_PATH_DEPTH: usize = 15;

/// Parameter (under `/<env>/`) holding the KMS key for secure strings.
pub const KMS_KEY_PARAMETER: &str = "KMS_KEY_ID";

/// Separator used to store list values.
pub const LIST_SEPARATOR: char = ',';

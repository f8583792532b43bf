//! Test fixtures and constants.

/// Env list mixing references, an absolute name and a literal.
pub const SAMPLE_ENV_LIST: &str = "\
# api service
DATABASE_URL
API_KEY

/shared/SENTRY_DSN
PORT=8080
";

/// Credentials file as written by the prompt.
pub const SAMPLE_CREDENTIALS: &str =
    "[default]\naws_access_key_id=AKIATEST\naws_secret_access_key=test-secret\n";

/// Materialized env file for `run` tests.
pub const SAMPLE_ENV: &str = "GREETING=hello\nTARGET=\"big world\"\n";

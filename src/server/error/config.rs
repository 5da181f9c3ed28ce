use thiserror::Error;

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent from both the process environment
    /// and the optional `.env` file.
    #[error("Environment variable {0} must be set")]
    MissingEnvVar(String),
}

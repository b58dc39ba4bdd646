use thiserror::Error;

// Errors from the configuration surface. Evaluation itself is total.
#[derive(Debug, Error)]
pub enum ConfigError {
    // `--set` argument without a `NAME=VALUE` shape
    #[error("invalid binding `{0}`: expected NAME=BOOL")]
    InvalidBinding(String),

    // Right-hand side of a binding that is not a recognised boolean
    #[error("invalid boolean `{value}` for variable `{name}`")]
    InvalidBool { name: String, value: String },

    // `--vars` payload that is not a JSON object of booleans
    #[error("invalid variables JSON: {0}")]
    InvalidVars(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! Error types for the cardgate CLI.

use cardgate_config::ConfigError;
use cardgate_payments::PaymentError;
use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// Settings could not be loaded or validated
    Config(ConfigError),

    /// The gateway call failed
    Payment(PaymentError),

    /// Invalid argument
    InvalidArgument(String),

    /// Output could not be rendered
    Output(String),
}

impl CliError {
    /// Process exit code: 2 for usage and settings problems, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::InvalidArgument(_) => 2,
            CliError::Payment(PaymentError::Config(_)) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Payment(PaymentError::Verification(msg)) => {
                write!(f, "Response rejected: {}", msg)
            }
            CliError::Payment(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Payment(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<PaymentError> for CliError {
    fn from(e: PaymentError) -> Self {
        CliError::Payment(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

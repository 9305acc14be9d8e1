//! Error types for gateway operations

use crate::codes::ResultCode;
use crate::transport::TransportError;
use crate::types::PaymentResponse;
use thiserror::Error;

/// Payment error types
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Response signature did not verify against the gateway key
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Verified response carrying a non-zero result code
    #[error(
        "{operation} failed with result code {}: {}",
        .response.result_code,
        .response.result_message.as_deref().unwrap_or("")
    )]
    Gateway {
        operation: &'static str,
        response: Box<PaymentResponse>,
    },

    /// Transport failure, passed through as produced by the transport
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// Response body was not a usable JSON object
    #[error("Invalid response (HTTP {status}): {message}")]
    InvalidResponse { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Result code of a gateway rejection
    pub fn result_code(&self) -> Option<ResultCode> {
        match self {
            Self::Gateway { response, .. } => Some(response.code()),
            _ => None,
        }
    }

    /// Verified gateway response attached to a rejection
    pub fn response(&self) -> Option<&PaymentResponse> {
        match self {
            Self::Gateway { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Check if this is a signature verification failure
    pub fn is_verification(&self) -> bool {
        matches!(self, Self::Verification(_))
    }

    /// Check if the gateway rejected the operation
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }

    /// Check if the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(feature = "config")]
impl From<cardgate_config::ConfigError> for PaymentError {
    fn from(err: cardgate_config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for gateway operations
pub type PaymentResult<T> = Result<T, PaymentError>;

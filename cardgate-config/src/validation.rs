// Settings validation

use crate::{ConfigError, Result};

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Protocol versions the gateway client understands.
pub const KNOWN_PROTOCOL_VERSIONS: &[&str] = &["1.7", "1.8", "1.9"];

/// Configuration validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is not empty
    pub fn not_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value is in a list of allowed values
    pub fn one_of<T: PartialEq>(value: &T, allowed: &[T], field: &str) -> Result<()> {
        if !allowed.contains(value) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be one of the allowed values",
                field
            )));
        }
        Ok(())
    }

    /// Validate URL format
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a valid URL",
                field
            )));
        }
        Ok(())
    }

    /// Validate that a value carries PEM armor (`-----BEGIN ...-----`).
    ///
    /// Only the envelope is checked here; the key itself is parsed when the
    /// gateway client is constructed.
    pub fn is_pem(value: &str, field: &str) -> Result<()> {
        let trimmed = value.trim();
        if !trimmed.starts_with("-----BEGIN ") || !trimmed.contains("-----END ") {
            return Err(ConfigError::ValidationError(format!(
                "{} must be PEM encoded",
                field
            )));
        }
        Ok(())
    }

    /// Validate a gateway protocol version string (`1.7`, `v1.8`, ...).
    pub fn is_protocol_version(value: &str, field: &str) -> Result<()> {
        let normalized = value.trim().trim_start_matches(['v', 'V']);
        Self::one_of(&normalized, KNOWN_PROTOCOL_VERSIONS, field)
    }

    /// Validate a timeout in seconds
    pub fn is_timeout(value: u64, field: &str) -> Result<()> {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must be greater than zero",
                field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_validation() {
        assert!(ConfigValidator::not_empty("value", "field").is_ok());
        assert!(ConfigValidator::not_empty("", "field").is_err());
        assert!(ConfigValidator::not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(ConfigValidator::is_url("https://example.com", "field").is_ok());
        assert!(ConfigValidator::is_url("http://example.com", "field").is_ok());
        assert!(ConfigValidator::is_url("example.com", "field").is_err());
    }

    #[test]
    fn test_pem_validation() {
        let pem = "-----BEGIN PUBLIC KEY-----\nMIIB\n-----END PUBLIC KEY-----\n";
        assert!(ConfigValidator::is_pem(pem, "key").is_ok());
        assert!(ConfigValidator::is_pem("MIIBIjANBgkq", "key").is_err());
    }

    #[test]
    fn test_protocol_version_validation() {
        assert!(ConfigValidator::is_protocol_version("1.7", "v").is_ok());
        assert!(ConfigValidator::is_protocol_version("v1.9", "v").is_ok());
        assert!(ConfigValidator::is_protocol_version("2.0", "v").is_err());
    }

    #[test]
    fn test_timeout_validation() {
        assert!(ConfigValidator::is_timeout(30, "timeout").is_ok());
        assert!(ConfigValidator::is_timeout(0, "timeout").is_err());
    }
}

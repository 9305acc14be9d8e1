// Gateway settings record

use crate::{ConfigError, ConfigValidator, Result, Validate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Flat settings record for one merchant's gateway connection.
///
/// Every field is optional at the serde level so that layers can fill in
/// pieces independently; [`Validate`] enforces the required set once the
/// layers are merged and key files resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewaySettings {
    /// Gateway base URL including the version segment
    pub gate_url: Option<String>,
    pub merchant_id: Option<String>,
    /// Default return URL for payments
    pub callback_url: Option<String>,
    /// Merchant private key, inline PEM
    pub private_key: Option<String>,
    /// File holding the merchant private key
    pub private_key_path: Option<String>,
    /// Gateway public key, inline PEM
    pub gateway_public_key: Option<String>,
    /// File holding the gateway public key
    pub gateway_public_key_path: Option<String>,
    pub merchant_public_key: Option<String>,
    pub merchant_public_key_path: Option<String>,
    /// `1.7`, `1.8` or `1.9`
    pub protocol_version: Option<String>,
    /// Request timeout in seconds; numbers and numeric strings both accepted
    #[serde(deserialize_with = "number_or_string")]
    pub timeout_secs: Option<u64>,
}

impl GatewaySettings {
    /// Read PEM material from `*_path` settings into the matching inline
    /// fields. Inline values take precedence over paths.
    pub fn resolve_keys(&mut self) -> Result<()> {
        resolve_pem(&mut self.private_key, self.private_key_path.as_deref())?;
        resolve_pem(
            &mut self.gateway_public_key,
            self.gateway_public_key_path.as_deref(),
        )?;
        resolve_pem(
            &mut self.merchant_public_key,
            self.merchant_public_key_path.as_deref(),
        )?;
        Ok(())
    }

    /// Return a required field or a [`ConfigError::Missing`] naming it.
    pub fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
        value
            .as_deref()
            .ok_or_else(|| ConfigError::Missing(field.to_string()))
    }
}

fn resolve_pem(inline: &mut Option<String>, path: Option<&str>) -> Result<()> {
    if inline.is_some() {
        return Ok(());
    }
    if let Some(path) = path {
        let pem = fs::read_to_string(Path::new(path)).map_err(|source| ConfigError::KeyFile {
            path: path.to_string(),
            source,
        })?;
        *inline = Some(pem);
    }
    Ok(())
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s))),
    }
}

impl Validate for GatewaySettings {
    fn validate(&self) -> Result<()> {
        let gate_url = Self::required(&self.gate_url, "gate_url")?;
        ConfigValidator::not_empty(gate_url, "gate_url")?;
        ConfigValidator::is_url(gate_url, "gate_url")?;

        let merchant_id = Self::required(&self.merchant_id, "merchant_id")?;
        ConfigValidator::not_empty(merchant_id, "merchant_id")?;

        let callback_url = Self::required(&self.callback_url, "callback_url")?;
        ConfigValidator::is_url(callback_url, "callback_url")?;

        let private_key = Self::required(&self.private_key, "private_key")?;
        ConfigValidator::is_pem(private_key, "private_key")?;

        let gateway_key = Self::required(&self.gateway_public_key, "gateway_public_key")?;
        ConfigValidator::is_pem(gateway_key, "gateway_public_key")?;

        if let Some(ref key) = self.merchant_public_key {
            ConfigValidator::is_pem(key, "merchant_public_key")?;
        }
        if let Some(ref version) = self.protocol_version {
            ConfigValidator::is_protocol_version(version, "protocol_version")?;
        }
        if let Some(timeout) = self.timeout_secs {
            ConfigValidator::is_timeout(timeout, "timeout_secs")?;
        }

        Ok(())
    }
}

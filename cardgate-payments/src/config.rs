//! Gateway client configuration

use crate::logger::{GatewayLogger, TracingLogger};
use crate::signature::{HashAlgorithm, ProtocolVersion};
use crate::{PaymentError, PaymentResult};
#[cfg(feature = "config")]
use cardgate_config::GatewaySettings;
use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Immutable configuration of one merchant's gateway connection
#[derive(Debug)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://iapi.iplatebnibrana.csob.cz/api/v1.7`, without trailing slash
    pub gate_url: String,
    pub merchant_id: String,
    /// Return URL the gateway sends customers back to
    pub callback_url: String,
    /// Merchant private key, PEM
    pub private_key: SecretString,
    /// Gateway public key, PEM
    pub gateway_public_key: String,
    /// Merchant public key, PEM; checked against the private key when set
    pub merchant_public_key: Option<String>,
    pub protocol_version: ProtocolVersion,
    /// Explicit digest, overriding the protocol version's
    pub hash_algorithm: Option<HashAlgorithm>,
    /// Request timeout for the default HTTP transport
    pub timeout: Option<Duration>,
    pub logger: Arc<dyn GatewayLogger>,
}

impl GatewayConfig {
    /// Create a new configuration builder
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Digest used for signing and verification
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
            .unwrap_or_else(|| self.protocol_version.hash_algorithm())
    }

    /// Build from layered settings. Key files must already be resolved.
    #[cfg(feature = "config")]
    pub fn from_settings(settings: &GatewaySettings) -> PaymentResult<Self> {
        let mut builder = Self::builder()
            .gate_url(GatewaySettings::required(&settings.gate_url, "gate_url")?)
            .merchant_id(GatewaySettings::required(&settings.merchant_id, "merchant_id")?)
            .callback_url(GatewaySettings::required(&settings.callback_url, "callback_url")?)
            .private_key(GatewaySettings::required(&settings.private_key, "private_key")?)
            .gateway_public_key(GatewaySettings::required(
                &settings.gateway_public_key,
                "gateway_public_key",
            )?);

        if let Some(ref key) = settings.merchant_public_key {
            builder = builder.merchant_public_key(key);
        }
        if let Some(ref version) = settings.protocol_version {
            builder = builder.protocol_version(version.parse()?);
        }
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

/// Builder for [`GatewayConfig`]
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    gate_url: Option<String>,
    merchant_id: Option<String>,
    callback_url: Option<String>,
    private_key: Option<SecretString>,
    gateway_public_key: Option<String>,
    merchant_public_key: Option<String>,
    protocol_version: ProtocolVersion,
    hash_algorithm: Option<HashAlgorithm>,
    timeout: Option<Duration>,
    logger: Option<Arc<dyn GatewayLogger>>,
}

impl GatewayConfigBuilder {
    /// Gateway base URL including the protocol version segment
    pub fn gate_url(mut self, url: impl Into<String>) -> Self {
        self.gate_url = Some(url.into());
        self
    }

    /// Merchant id assigned by the gateway
    pub fn merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Default return URL for payments
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Merchant private key (PEM, PKCS#1 or PKCS#8)
    pub fn private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(SecretString::from(pem.into()));
        self
    }

    /// Gateway public key (PEM)
    pub fn gateway_public_key(mut self, pem: impl Into<String>) -> Self {
        self.gateway_public_key = Some(pem.into());
        self
    }

    /// Merchant public key (PEM)
    pub fn merchant_public_key(mut self, pem: impl Into<String>) -> Self {
        self.merchant_public_key = Some(pem.into());
        self
    }

    /// Protocol version, which picks the default digest
    pub fn protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.protocol_version = version;
        self
    }

    /// Force a digest regardless of protocol version
    pub fn hash_algorithm(mut self, hash: HashAlgorithm) -> Self {
        self.hash_algorithm = Some(hash);
        self
    }

    /// Request timeout for the default HTTP transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Log sink; defaults to [`TracingLogger`]
    pub fn logger(mut self, logger: Arc<dyn GatewayLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the configuration
    pub fn build(self) -> PaymentResult<GatewayConfig> {
        let gate_url = required(self.gate_url, "gate URL")?;
        let callback_url = required(self.callback_url, "callback URL")?;
        let merchant_id = required(self.merchant_id, "merchant id")?;
        let gateway_public_key = required(self.gateway_public_key, "gateway public key")?;
        let private_key = self
            .private_key
            .ok_or_else(|| PaymentError::Config("private key is required".to_string()))?;

        check_url(&gate_url, "gate URL")?;
        check_url(&callback_url, "callback URL")?;

        Ok(GatewayConfig {
            gate_url: gate_url.trim_end_matches('/').to_string(),
            merchant_id,
            callback_url,
            private_key,
            gateway_public_key,
            merchant_public_key: self.merchant_public_key,
            protocol_version: self.protocol_version,
            hash_algorithm: self.hash_algorithm,
            timeout: self.timeout,
            logger: self.logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        })
    }
}

fn required(value: Option<String>, name: &str) -> PaymentResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PaymentError::Config(format!("{} is required", name))),
    }
}

fn check_url(value: &str, name: &str) -> PaymentResult<()> {
    let url = Url::parse(value)
        .map_err(|e| PaymentError::Config(format!("{} is not a valid URL: {}", name, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PaymentError::Config(format!(
            "{} must use http or https, not {}",
            name, other
        ))),
    }
}

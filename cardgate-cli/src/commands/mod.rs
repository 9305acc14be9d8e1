//! CLI command implementations.

pub mod callback;
pub mod echo;
pub mod one_click;
pub mod payment;

use cardgate_config::SettingsLoader;
use cardgate_payments::{Currency, GatewayConfig, PaymentGateway};
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Load layered settings and build a gateway client.
///
/// Without `--env-file` a `.env` in the working directory is picked up when
/// present.
pub fn connect(config: Option<&Path>, env_file: Option<&Path>) -> CliResult<PaymentGateway> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = config {
        loader = loader.file(path);
    }
    loader = match env_file {
        Some(path) => loader.dotenv_file(path),
        None => loader.default_dotenv(),
    };

    let settings = loader.load()?;
    debug!(
        gate_url = ?settings.gate_url,
        merchant_id = ?settings.merchant_id,
        "Settings loaded"
    );

    let config = GatewayConfig::from_settings(&settings)?;
    Ok(PaymentGateway::new(config)?)
}

/// Parse a currency code such as `CZK`
pub fn parse_currency(code: &str) -> CliResult<Currency> {
    Currency::from_code(code)
        .ok_or_else(|| CliError::InvalidArgument(format!("unknown currency: {}", code)))
}

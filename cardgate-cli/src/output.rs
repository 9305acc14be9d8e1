//! Terminal output helpers.

use cardgate_payments::PaymentResponse;
use colored::Colorize;
use serde::Serialize;

use crate::error::CliResult;

pub fn success(msg: &str) {
    println!("  {} {}", "✓".green().bold(), msg.green());
}

pub fn warn(msg: &str) {
    println!("  {} {}", "⚠".yellow().bold(), msg.yellow());
}

pub fn info(msg: &str) {
    println!("  {} {}", "→".cyan(), msg);
}

fn field(label: &str, value: &str) {
    println!("    {:<16} {}", format!("{}:", label).bright_white().bold(), value);
}

/// Print any serializable value as pretty JSON
pub fn json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a verified gateway result
pub fn response(title: &str, response: &PaymentResponse, as_json: bool) -> CliResult<()> {
    if as_json {
        return json(response);
    }

    success(title);
    if let Some(ref pay_id) = response.pay_id {
        field("Pay ID", &pay_id.cyan().to_string());
    }
    field(
        "Result",
        &format!(
            "{} {}",
            response.result_code,
            response.result_message.as_deref().unwrap_or_default()
        ),
    );
    if let Some(status) = response.status() {
        field("Status", &format!("{} ({:?})", status.code(), status));
    }
    if let Some(ref auth_code) = response.auth_code {
        field("Auth code", auth_code);
    }
    if let Some(ref detail) = response.status_detail {
        field("Detail", detail);
    }
    if let Some(ref data) = response.merchant_data {
        field("Merchant data", data);
    }
    if let Some(ref dttm) = response.dttm {
        field("Gateway time", &dttm.dimmed().to_string());
    }
    Ok(())
}

//! One-click command - pay with a stored card template.

use cardgate_payments::{Currency, OneClickInit, PaymentGateway};
use colored::Colorize;

use crate::error::CliResult;
use crate::output;

pub async fn run(
    gateway: &PaymentGateway,
    template: &str,
    order_no: &str,
    amount: i64,
    currency: Currency,
    json: bool,
) -> CliResult<()> {
    if !json {
        output::info(&format!("Checking template {}", template.cyan()));
    }
    gateway.one_click_echo(template).await?;

    let input = OneClickInit::new(template, order_no, amount, currency);
    let response = gateway.one_click_payment(input).await?;
    output::response("One-click payment started", &response, json)
}

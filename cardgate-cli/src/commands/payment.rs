//! Payment lifecycle commands.

use cardgate_payments::{CartItem, Currency, InitPayment, Language, PaymentGateway};
use colored::Colorize;
use serde_json::json;

use crate::error::{CliError, CliResult};
use crate::output;

/// Arguments of `cardgate init`
#[derive(Debug)]
pub struct InitArgs {
    pub order_no: String,
    pub amount: i64,
    pub currency: Currency,
    pub items: Vec<CartItem>,
    pub description: Option<String>,
    pub language: Option<Language>,
    pub close_payment: bool,
}

/// Parse a cart item given as `name:quantity:amount`.
///
/// The name may itself contain colons; the last two fields are numeric.
pub fn parse_item(raw: &str) -> CliResult<CartItem> {
    let invalid = || {
        CliError::InvalidArgument(format!(
            "cart item must be name:quantity:amount, got {:?}",
            raw
        ))
    };

    let mut parts = raw.rsplitn(3, ':');
    let amount = parts.next().ok_or_else(invalid)?;
    let quantity = parts.next().ok_or_else(invalid)?;
    let name = parts.next().filter(|n| !n.is_empty()).ok_or_else(invalid)?;

    let quantity = quantity.trim().parse().map_err(|_| invalid())?;
    let amount = amount.trim().parse().map_err(|_| invalid())?;
    Ok(CartItem::new(name, quantity, amount))
}

pub async fn init(gateway: &PaymentGateway, args: InitArgs, json: bool) -> CliResult<()> {
    let mut payment = InitPayment::new(args.order_no, args.amount, args.currency)
        .close_payment(args.close_payment);
    for item in args.items {
        payment = payment.item(item);
    }
    if let Some(description) = args.description {
        payment = payment.description(description);
    }
    if let Some(language) = args.language {
        payment = payment.language(language);
    }

    let response = gateway.init(payment).await?;
    output::response("Payment created", &response, json)?;

    if !json && let Some(ref pay_id) = response.pay_id {
        output::info(&format!("Redirect the customer to:\n    {}", gateway.redirect_url(pay_id)?.cyan()));
    }
    Ok(())
}

pub fn redirect_url(gateway: &PaymentGateway, pay_id: &str, json: bool) -> CliResult<()> {
    let url = gateway.redirect_url(pay_id)?;
    if json {
        output::json(&json!({ "payId": pay_id, "redirectUrl": url }))
    } else {
        println!("{}", url);
        Ok(())
    }
}

pub async fn status(gateway: &PaymentGateway, pay_id: &str, json: bool) -> CliResult<()> {
    let response = gateway.status(pay_id).await?;
    output::response("Payment status", &response, json)
}

pub async fn reverse(gateway: &PaymentGateway, pay_id: &str, json: bool) -> CliResult<()> {
    let response = gateway.reverse(pay_id).await?;
    output::response("Payment reversed", &response, json)
}

pub async fn close(
    gateway: &PaymentGateway,
    pay_id: &str,
    amount: Option<i64>,
    json: bool,
) -> CliResult<()> {
    let response = gateway.close(pay_id, amount).await?;
    output::response("Payment closed for settlement", &response, json)
}

pub async fn refund(
    gateway: &PaymentGateway,
    pay_id: &str,
    amount: Option<i64>,
    json: bool,
) -> CliResult<()> {
    if amount.is_none() && !json {
        output::warn("No --amount given, refunding the full amount");
    }
    let response = gateway.refund(pay_id, amount).await?;
    output::response("Payment refunded", &response, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let item = parse_item("Shoes:1:1500").unwrap();
        assert_eq!(item.name, "Shoes");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.amount, 1500);
    }

    #[test]
    fn test_parse_item_name_with_colon() {
        let item = parse_item("Size: 42:2:300").unwrap();
        assert_eq!(item.name, "Size: 42");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_parse_item_rejects_malformed() {
        for raw in ["Shoes", "Shoes:1", ":1:100", "Shoes:x:100", "Shoes:1:ten"] {
            assert!(parse_item(raw).is_err(), "{}", raw);
        }
    }
}

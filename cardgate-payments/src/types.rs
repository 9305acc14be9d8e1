//! Request payloads and gateway results
//!
//! Caller-facing inputs (`InitPayment`, `OneClickInit`, `AppPayInit`, `Order`)
//! are turned into wire payloads by the gateway client, which adds the
//! merchant id, template defaults and a fresh `dttm`. Wire payloads never carry
//! a signature; signing produces a separate [`SignedRequest`](crate::SignedRequest).

use crate::codes::{
    Currency, Language, PayMethod, PayOperation, PaymentStatus, ResultCode, ReturnMethod,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Base64-encode opaque merchant data for the wire
pub fn encode_merchant_data(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Cart line item. Amounts are in hundredths of the currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub name: String,
    pub quantity: u32,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CartItem {
    /// Create a new cart item
    pub fn new(name: impl Into<String>, quantity: u32, amount: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            amount,
            description: None,
        }
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payment init input.
///
/// Fields left unset fall back to the client's template: `payOperation`
/// payment, `payMethod` card, `closePayment` true, `returnMethod` POST and
/// the configured callback URL.
#[derive(Debug, Clone, PartialEq)]
pub struct InitPayment {
    pub order_no: String,
    pub total_amount: i64,
    pub currency: Currency,
    pub language: Option<Language>,
    pub cart: Vec<CartItem>,
    pub description: Option<String>,
    pub orig_pay_id: Option<String>,
    pub pay_operation: Option<PayOperation>,
    pub pay_method: Option<PayMethod>,
    pub close_payment: Option<bool>,
    pub return_url: Option<String>,
    pub return_method: Option<ReturnMethod>,
    pub merchant_data: Option<String>,
    pub customer_id: Option<String>,
    pub ttl_sec: Option<u32>,
    pub logo_version: Option<u32>,
    pub color_scheme_version: Option<u32>,
}

impl InitPayment {
    /// Create an init request for the given order
    pub fn new(order_no: impl Into<String>, total_amount: i64, currency: Currency) -> Self {
        Self {
            order_no: order_no.into(),
            total_amount,
            currency,
            language: None,
            cart: Vec::new(),
            description: None,
            orig_pay_id: None,
            pay_operation: None,
            pay_method: None,
            close_payment: None,
            return_url: None,
            return_method: None,
            merchant_data: None,
            customer_id: None,
            ttl_sec: None,
            logo_version: None,
            color_scheme_version: None,
        }
    }

    /// Add a cart item
    pub fn item(mut self, item: CartItem) -> Self {
        self.cart.push(item);
        self
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With payment page language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// With merchant data, base64-encoded for the wire
    pub fn merchant_data(mut self, data: impl AsRef<[u8]>) -> Self {
        self.merchant_data = Some(encode_merchant_data(data));
        self
    }

    /// With customer ID
    pub fn customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Override the payment operation
    pub fn operation(mut self, operation: PayOperation) -> Self {
        self.pay_operation = Some(operation);
        self
    }

    /// Override the payment method
    pub fn method(mut self, method: PayMethod) -> Self {
        self.pay_method = Some(method);
        self
    }

    /// Set whether the payment is closed (settled) automatically
    pub fn close_payment(mut self, close: bool) -> Self {
        self.close_payment = Some(close);
        self
    }

    /// Override the return URL and method
    pub fn return_to(mut self, url: impl Into<String>, method: ReturnMethod) -> Self {
        self.return_url = Some(url.into());
        self.return_method = Some(method);
        self
    }

    /// Payment page lifetime in seconds
    pub fn ttl_sec(mut self, ttl: u32) -> Self {
        self.ttl_sec = Some(ttl);
        self
    }
}

/// One-click payment input: a new payment reusing a stored card template
#[derive(Debug, Clone, PartialEq)]
pub struct OneClickInit {
    pub template_pay_id: String,
    pub order_no: String,
    pub total_amount: i64,
    pub currency: Currency,
    pub close_payment: Option<bool>,
    pub merchant_data: Option<String>,
    pub description: Option<String>,
}

impl OneClickInit {
    /// Create a new one-click input
    pub fn new(
        template_pay_id: impl Into<String>,
        order_no: impl Into<String>,
        total_amount: i64,
        currency: Currency,
    ) -> Self {
        Self {
            template_pay_id: template_pay_id.into(),
            order_no: order_no.into(),
            total_amount,
            currency,
            close_payment: None,
            merchant_data: None,
            description: None,
        }
    }

    /// Set whether the payment is closed automatically
    pub fn close_payment(mut self, close: bool) -> Self {
        self.close_payment = Some(close);
        self
    }

    /// With merchant data, base64-encoded for the wire
    pub fn merchant_data(mut self, data: impl AsRef<[u8]>) -> Self {
        self.merchant_data = Some(encode_merchant_data(data));
        self
    }

    /// With description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Google Pay / Apple Pay init input
#[derive(Debug, Clone, PartialEq)]
pub struct AppPayInit {
    pub order_no: String,
    pub client_ip: String,
    pub total_amount: i64,
    pub currency: Currency,
    /// Wallet payload as returned by the wallet SDK (a JSON string)
    pub payload: String,
    pub close_payment: Option<bool>,
    pub return_url: Option<String>,
    pub return_method: Option<ReturnMethod>,
    pub sdk_used: Option<bool>,
    pub merchant_data: Option<String>,
    pub language: Option<Language>,
    pub ttl_sec: Option<u32>,
}

impl AppPayInit {
    /// Create a new wallet init input
    pub fn new(
        order_no: impl Into<String>,
        client_ip: impl Into<String>,
        total_amount: i64,
        currency: Currency,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            order_no: order_no.into(),
            client_ip: client_ip.into(),
            total_amount,
            currency,
            payload: payload.into(),
            close_payment: None,
            return_url: None,
            return_method: None,
            sdk_used: None,
            merchant_data: None,
            language: None,
            ttl_sec: None,
        }
    }

    /// Mark the wallet payload as produced by the mobile SDK
    pub fn sdk_used(mut self, used: bool) -> Self {
        self.sdk_used = Some(used);
        self
    }

    /// With payment page language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// With merchant data, base64-encoded for the wire
    pub fn merchant_data(mut self, data: impl AsRef<[u8]>) -> Self {
        self.merchant_data = Some(encode_merchant_data(data));
        self
    }

    /// Set whether the payment is closed automatically
    pub fn close_payment(mut self, close: bool) -> Self {
        self.close_payment = Some(close);
        self
    }
}

/// Order for the pay-order composite: the total is the sum of the items
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_no: String,
    pub description: String,
    pub items: Vec<CartItem>,
    pub currency: Currency,
    pub language: Option<Language>,
    /// Raw merchant data; base64-encoded when the order is sent
    pub merchant_data: Option<Vec<u8>>,
}

impl Order {
    /// Create a new order
    pub fn new(order_no: impl Into<String>, description: impl Into<String>, currency: Currency) -> Self {
        Self {
            order_no: order_no.into(),
            description: description.into(),
            items: Vec::new(),
            currency,
            language: None,
            merchant_data: None,
        }
    }

    /// Add an item
    pub fn item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }

    /// With payment page language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// With merchant data
    pub fn merchant_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.merchant_data = Some(data.into());
        self
    }

    /// Sum of item amounts
    pub fn total_amount(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }
}

/// Outcome of the pay-order composite
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRedirect {
    /// Verified init result
    pub init: PaymentResponse,
    pub pay_id: String,
    /// Where to send the customer
    pub redirect_url: String,
}

// Wire payloads. Field order matches the canonical layouts so that the JSON
// body reads in signing order.

/// `payment/init` and `oneclick/init` body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    pub merchant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_pay_id: Option<String>,
    pub order_no: String,
    pub dttm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_operation: Option<PayOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_method: Option<PayMethod>,
    pub total_amount: i64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_method: Option<ReturnMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cart: Vec<CartItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme_version: Option<u32>,
}

/// `googlepay/init` and `applepay/init` body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPayInitRequest {
    pub merchant_id: String,
    pub order_no: String,
    pub dttm: String,
    pub client_ip: String,
    pub total_amount: i64,
    pub currency: Currency,
    pub close_payment: bool,
    pub payload: String,
    pub return_url: String,
    pub return_method: ReturnMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_used: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_sec: Option<u32>,
}

/// `merchantId|payId|dttm` body or path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChallenge {
    pub merchant_id: String,
    pub pay_id: String,
    pub dttm: String,
}

/// Close and refund body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountChallenge {
    pub merchant_id: String,
    pub pay_id: String,
    pub dttm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Echo body or path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoRequest {
    pub merchant_id: String,
    pub dttm: String,
}

/// One-click echo body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OneClickEchoRequest {
    pub merchant_id: String,
    pub orig_pay_id: String,
    pub dttm: String,
}

fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "resultCode must be a number or string, got {}",
            other
        ))),
    }
}

// Return-URL callbacks deliver every field as text
fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("not an integer: {}", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not an integer: {}", s))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected an integer, got {}",
            other
        ))),
    }
}

/// Typed gateway result.
///
/// `result_code` keeps the string form of whatever the gateway sent; fields
/// the client does not model (`actions`, `customerCode`, ...) are kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dttm: Option<String>,
    #[serde(deserialize_with = "code_as_string")]
    pub result_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Decoded merchant data on verified callbacks, raw base64 elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentResponse {
    /// Typed result code
    pub fn code(&self) -> ResultCode {
        ResultCode::from_code(&self.result_code)
    }

    /// Whether the result code is `0`
    pub fn is_ok(&self) -> bool {
        self.code().is_ok()
    }

    /// Typed payment status, when present and known
    pub fn status(&self) -> Option<PaymentStatus> {
        self.payment_status.and_then(PaymentStatus::from_code)
    }
}

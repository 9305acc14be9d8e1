//! Message canonicalization
//!
//! The gateway signs a pipe-joined list of scalar field values rather than the
//! JSON document itself. Which fields take part, and in what order, is fixed
//! per message type by a [`MessageLayout`]. Canonicalization walks the layout,
//! never the payload, so field insertion order has no effect on the result.

use serde_json::Value;

/// Field separator of the canonical string
pub const SEPARATOR: char = '|';

/// Repeated group spliced between the head and tail keys (the cart)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSplice {
    /// Payload key holding the array of items
    pub key: &'static str,
    /// Per-item keys, in wire order
    pub fields: &'static [&'static str],
}

/// Ordered key list for one message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLayout {
    pub head: &'static [&'static str],
    pub items: Option<ItemSplice>,
    pub tail: &'static [&'static str],
}

impl MessageLayout {
    /// A flat layout with no item splice
    pub const fn flat(keys: &'static [&'static str]) -> Self {
        Self {
            head: keys,
            items: None,
            tail: &[],
        }
    }
}

/// Cart line item keys
pub const CART: ItemSplice = ItemSplice {
    key: "cart",
    fields: &["name", "quantity", "amount", "description"],
};

/// Payment init request (also used for one-click init)
pub const INIT_REQUEST: MessageLayout = MessageLayout {
    head: &[
        "merchantId",
        "origPayId",
        "orderNo",
        "payId",
        "dttm",
        "payOperation",
        "payMethod",
        "totalAmount",
        "currency",
        "closePayment",
        "returnUrl",
        "returnMethod",
    ],
    items: Some(CART),
    tail: &[
        "description",
        "merchantData",
        "customerId",
        "language",
        "ttlSec",
        "logoVersion",
        "colorSchemeVersion",
    ],
};

/// Google Pay / Apple Pay init request
pub const APP_PAY_INIT_REQUEST: MessageLayout = MessageLayout {
    head: &[
        "merchantId",
        "orderNo",
        "dttm",
        "clientIp",
        "totalAmount",
        "currency",
        "closePayment",
        "payload",
        "returnUrl",
        "returnMethod",
    ],
    items: None,
    tail: &["sdkUsed", "merchantData", "language", "ttlSec"],
};

/// `merchantId|payId|dttm` challenge (redirect, status, reverse, process, start)
pub const PAYMENT_CHALLENGE: MessageLayout =
    MessageLayout::flat(&["merchantId", "payId", "dttm"]);

/// Close and refund requests
pub const AMOUNT_CHALLENGE: MessageLayout =
    MessageLayout::flat(&["merchantId", "payId", "dttm", "amount"]);

/// Echo requests
pub const ECHO_CHALLENGE: MessageLayout = MessageLayout::flat(&["merchantId", "dttm"]);

/// One-click echo request
pub const ONE_CLICK_ECHO_CHALLENGE: MessageLayout =
    MessageLayout::flat(&["merchantId", "origPayId", "dttm"]);

/// Generic operation result
pub const RESULT: MessageLayout = MessageLayout::flat(&[
    "merchantId",
    "payId",
    "dttm",
    "resultCode",
    "resultMessage",
    "paymentStatus",
    "authCode",
    "merchantData",
]);

/// Payment status result
pub const STATUS_RESULT: MessageLayout = MessageLayout::flat(&[
    "payId",
    "dttm",
    "resultCode",
    "resultMessage",
    "paymentStatus",
    "authCode",
    "statusDetail",
]);

/// Echo result
pub const ECHO_RESULT: MessageLayout =
    MessageLayout::flat(&["dttm", "resultCode", "resultMessage"]);

/// Stringify a scalar; `None` for absent, null and nested values
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn push_keys(out: &mut Vec<String>, object: &Value, keys: &[&str]) {
    out.extend(keys.iter().filter_map(|key| scalar(object.get(*key))));
}

/// The values that make up the canonical string, in layout order
pub fn canonical_values(payload: &Value, layout: &MessageLayout) -> Vec<String> {
    let mut values = Vec::new();

    push_keys(&mut values, payload, layout.head);

    if let Some(splice) = layout.items
        && let Some(Value::Array(items)) = payload.get(splice.key)
    {
        for item in items {
            push_keys(&mut values, item, splice.fields);
        }
    }

    push_keys(&mut values, payload, layout.tail);
    values
}

/// Build the canonical string for `payload` under `layout`
pub fn canonicalize(payload: &Value, layout: &MessageLayout) -> String {
    canonical_values(payload, layout).join(&SEPARATOR.to_string())
}

/// Whether any value taking part in the canonical string contains the
/// separator, which makes the string ambiguous. Callers log this; it is
/// never a rejection.
pub fn contains_separator(payload: &Value, layout: &MessageLayout) -> bool {
    canonical_values(payload, layout)
        .iter()
        .any(|value| value.contains(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_irrelevant() {
        let a = json!({"merchantId": "M1", "payId": "P1", "dttm": "20240101120000"});
        let b = json!({"dttm": "20240101120000", "payId": "P1", "merchantId": "M1"});

        assert_eq!(
            canonicalize(&a, &PAYMENT_CHALLENGE),
            canonicalize(&b, &PAYMENT_CHALLENGE)
        );
        assert_eq!(canonicalize(&a, &PAYMENT_CHALLENGE), "M1|P1|20240101120000");
    }

    #[test]
    fn test_extra_and_missing_fields() {
        let payload = json!({
            "merchantId": "M1",
            "dttm": "20240101120000",
            "unrelated": "ignored",
            "signature": "c2ln"
        });

        assert_eq!(canonicalize(&payload, &PAYMENT_CHALLENGE), "M1|20240101120000");
    }

    #[test]
    fn test_cart_splice_order() {
        let payload = json!({
            "merchantId": "M1",
            "orderNo": "5547",
            "dttm": "20240101120000",
            "payOperation": "payment",
            "payMethod": "card",
            "totalAmount": 500,
            "currency": "CZK",
            "closePayment": true,
            "returnUrl": "https://shop.example/return",
            "returnMethod": "POST",
            "cart": [
                {"name": "A", "quantity": 1, "amount": 100},
                {"amount": 200, "quantity": 2, "name": "B", "description": "second"}
            ],
            "description": "Order 5547",
            "language": "CS"
        });

        assert_eq!(
            canonicalize(&payload, &INIT_REQUEST),
            "M1|5547|20240101120000|payment|card|500|CZK|true|\
             https://shop.example/return|POST|A|1|100|B|2|200|second|Order 5547|CS"
        );
    }

    #[test]
    fn test_null_and_nested_values_skipped() {
        let payload = json!({
            "merchantId": "M1",
            "payId": null,
            "dttm": {"nested": "object"},
            "resultCode": 0,
            "resultMessage": ["list"],
            "paymentStatus": 4
        });

        assert_eq!(canonicalize(&payload, &RESULT), "M1|0|4");
    }

    #[test]
    fn test_cart_not_an_array_skipped() {
        let payload = json!({"merchantId": "M1", "cart": "oops", "description": "d"});
        assert_eq!(canonicalize(&payload, &INIT_REQUEST), "M1|d");
    }

    #[test]
    fn test_echo_result_layout() {
        let response = json!({
            "dttm": "20240101120001",
            "resultCode": 0,
            "resultMessage": "OK",
            "signature": "c2ln"
        });
        assert_eq!(canonicalize(&response, &ECHO_RESULT), "20240101120001|0|OK");
    }

    #[test]
    fn test_separator_flagged() {
        let clean = json!({"merchantId": "M1", "dttm": "20240101120000"});
        let dirty = json!({"merchantId": "M1|M2", "dttm": "20240101120000"});

        assert!(!contains_separator(&clean, &ECHO_CHALLENGE));
        assert!(contains_separator(&dirty, &ECHO_CHALLENGE));
        assert_eq!(canonicalize(&dirty, &ECHO_CHALLENGE), "M1|M2|20240101120000");
    }

    #[test]
    fn test_separator_in_ignored_field_not_flagged() {
        let payload = json!({"merchantId": "M1", "dttm": "1", "note": "a|b"});
        assert!(!contains_separator(&payload, &ECHO_CHALLENGE));
    }
}

//! Customer return (callback) verification
//!
//! After the payment page the gateway sends the customer back to the
//! merchant's return URL with a signed result, either as query parameters
//! (GET) or as a form body (POST). The merchant must verify it before
//! trusting it.

use crate::canonical;
use crate::gateway::PaymentGateway;
use crate::types::PaymentResponse;
use crate::{PaymentError, PaymentResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value, json};

const OPERATION: &str = "payment result";

/// Parse return-URL query or form parameters into a result object.
///
/// A leading `?` is ignored. Every value stays a string, exactly as signed.
pub fn parse_callback_query(query: &str) -> PaymentResult<Value> {
    let query = query.trim().trim_start_matches('?');
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query).map_err(|e| PaymentError::InvalidResponse {
            status: 0,
            message: format!("malformed callback parameters: {}", e),
        })?;

    let fields: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    Ok(Value::Object(fields))
}

fn result_code_of(result: &Value) -> Option<String> {
    match result.get("resultCode")? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn decode_merchant_data(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

fn typed(result: Value) -> PaymentResult<PaymentResponse> {
    serde_json::from_value(result).map_err(|e| PaymentError::InvalidResponse {
        status: 0,
        message: e.to_string(),
    })
}

impl PaymentGateway {
    /// Validate a result the customer brought back from the payment page.
    ///
    /// The result code is checked first (non-zero is a gateway rejection),
    /// then the signature. On success `merchantData` is decoded from base64
    /// when it holds UTF-8 text; otherwise it is returned as received.
    pub fn verify_result(&self, result: Value) -> PaymentResult<PaymentResponse> {
        if !result.is_object() {
            return Err(PaymentError::InvalidResponse {
                status: 0,
                message: "payment result is not an object".to_string(),
            });
        }

        match result_code_of(&result) {
            Some(code) if code == "0" => {}
            Some(_) => return Err(self.reject(OPERATION, typed(result)?)),
            None => {
                return Err(PaymentError::InvalidResponse {
                    status: 0,
                    message: "payment result carries no resultCode".to_string(),
                });
            }
        }

        self.verify_body(OPERATION, &result, &canonical::RESULT)?;

        let mut response = typed(result)?;
        if let Some(ref encoded) = response.merchant_data {
            match decode_merchant_data(encoded) {
                Some(decoded) => response.merchant_data = Some(decoded),
                None => self.config().logger.info(
                    "merchantData is not base64 text, returned as received",
                    &json!({ "payId": response.pay_id }),
                ),
            }
        }

        Ok(response)
    }

    /// Parse and validate return-URL parameters
    pub fn verify_callback_query(&self, query: &str) -> PaymentResult<PaymentResponse> {
        self.verify_result(parse_callback_query(query)?)
    }
}

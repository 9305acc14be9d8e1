//! Verify-callback command - check a return-URL result offline.

use cardgate_payments::PaymentGateway;

use crate::error::CliResult;
use crate::output;

/// Verify the query string (or form body) the customer was returned with
pub fn run(gateway: &PaymentGateway, query: &str, json: bool) -> CliResult<()> {
    let query = match query.split_once('?') {
        Some((_, params)) => params,
        None => query,
    };

    let response = gateway.verify_callback_query(query)?;
    output::response("Callback signature verified", &response, json)
}

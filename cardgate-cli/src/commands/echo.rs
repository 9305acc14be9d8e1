//! Echo command - gateway liveness check.

use cardgate_payments::{EchoMethod, PaymentGateway};

use crate::error::CliResult;
use crate::output;

pub async fn run(gateway: &PaymentGateway, get: bool, json: bool) -> CliResult<()> {
    let method = if get { EchoMethod::Get } else { EchoMethod::Post };
    if !json {
        output::info(&format!(
            "Sending echo ({}) to {}",
            if get { "GET" } else { "POST" },
            gateway.config().gate_url
        ));
    }

    let response = gateway.echo(method).await?;
    output::response("Gateway is alive, response signature verified", &response, json)
}

// cardgate - signed-request client for card payment gateways
//
// This library builds canonical, RSA-signed requests for the payment
// lifecycle and verifies the gateway's signed responses and callbacks.

// Re-export the gateway client
pub use cardgate_payments::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use cardgate_config as config;

// Prelude for common imports
pub mod prelude {
    pub use cardgate_payments::prelude::*;
    pub use cardgate_payments::{
        AppPayInit, GatewayTransport, HttpTransport, OrderRedirect, SignedRequest,
        TransportRequest, TransportResponse,
    };

    #[cfg(feature = "config")]
    pub use cardgate_config::{GatewaySettings, SettingsLoader};
}

//! Signed-request client for card payment gateways
//!
//! Builds signed requests for the payment lifecycle, sends them over HTTPS and
//! verifies the gateway's signed responses, so a merchant backend never
//! hand-implements canonicalization, signing or verification.
//!
//! ## Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        PaymentGateway                          │
//! │  init | status | reverse | close | refund | echo | one-click   │
//! │  google pay | apple pay | pay_order | verify_result            │
//! └───────────────────────────────────────────────────────────────┘
//!        │ payload                                   ▲ result
//!        ▼                                           │
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────────┐
//! │ canonicalize │──▶│ MessageSigner│   │ SignatureVerifier     │
//! │ (layouts)    │   │ RSA PKCS#1   │   │ then resultCode == 0  │
//! └──────────────┘   └──────────────┘   └──────────────────────┘
//!                           │                        ▲
//!                           ▼                        │
//!                  ┌──────────────────────────────────────┐
//!                  │   GatewayTransport (HttpTransport)   │
//!                  └──────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cardgate_payments::{CartItem, Currency, GatewayConfig, InitPayment, PaymentGateway};
//!
//! let config = GatewayConfig::builder()
//!     .gate_url("https://iapi.iplatebnibrana.csob.cz/api/v1.7")
//!     .merchant_id("M1MIPS0000")
//!     .callback_url("https://shop.example/payment/return")
//!     .private_key(std::fs::read_to_string("merchant.key")?)
//!     .gateway_public_key(std::fs::read_to_string("gateway.pub")?)
//!     .build()?;
//!
//! let gateway = PaymentGateway::new(config)?;
//!
//! let payment = InitPayment::new("5547", 1600, Currency::CZK)
//!     .item(CartItem::new("Shoes", 1, 1500))
//!     .item(CartItem::new("Shipping", 1, 100))
//!     .description("Order 5547");
//!
//! let result = gateway.init(payment).await?;
//! let url = gateway.redirect_url(result.pay_id.as_deref().unwrap_or_default())?;
//! ```

pub mod callback;
pub mod canonical;
pub mod codes;
pub mod config;
pub mod dttm;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod operation;
pub mod signature;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use callback::parse_callback_query;
pub use canonical::{MessageLayout, canonicalize, contains_separator};
pub use codes::*;
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use dttm::{Clock, Dttm, FixedClock, SteppingClock, SystemClock};
pub use error::*;
pub use gateway::{EchoMethod, PaymentGateway, PaymentGatewayBuilder, SignedRequest};
pub use logger::{GatewayLogger, NoopLogger, TracingLogger};
pub use operation::Operation;
pub use signature::{HashAlgorithm, MessageSigner, ProtocolVersion, SignatureVerifier};
pub use transport::*;
pub use types::*;

/// Prelude for common imports
pub mod prelude {
    pub use crate::codes::{Currency, Language, PaymentStatus, ResultCode};
    pub use crate::config::GatewayConfig;
    pub use crate::error::{PaymentError, PaymentResult};
    pub use crate::gateway::{EchoMethod, PaymentGateway};
    pub use crate::signature::ProtocolVersion;
    pub use crate::types::{CartItem, InitPayment, OneClickInit, Order, PaymentResponse};
}

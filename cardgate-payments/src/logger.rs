//! Logging collaborator
//!
//! The gateway client reports failures and notable events through a
//! [`GatewayLogger`]. The default forwards to `tracing`; logging never fails
//! and never changes the outcome of an operation.

use serde_json::Value;
use std::fmt;

/// Tracing target used by [`TracingLogger`]
pub const LOG_TARGET: &str = "cardgate";

/// Sink for gateway log events
pub trait GatewayLogger: Send + Sync + fmt::Debug {
    fn info(&self, message: &str, context: &Value);

    fn error(&self, message: &str, context: &Value);
}

/// Emits `tracing` events under the `cardgate` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl GatewayLogger for TracingLogger {
    fn info(&self, message: &str, context: &Value) {
        tracing::info!(target: LOG_TARGET, context = %context, "{}", message);
    }

    fn error(&self, message: &str, context: &Value) {
        tracing::error!(target: LOG_TARGET, context = %context, "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl GatewayLogger for NoopLogger {
    fn info(&self, _message: &str, _context: &Value) {}

    fn error(&self, _message: &str, _context: &Value) {}
}

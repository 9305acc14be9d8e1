//! Gateway operation table
//!
//! Each operation maps to one HTTP method, one path and the layouts used to
//! canonicalize its request and its response.

use crate::canonical::MessageLayout;
use crate::transport::HttpMethod;
use std::fmt;

/// Every endpoint the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /payment/init`
    PaymentInit,
    /// `GET /payment/process`, the customer redirect
    PaymentProcess,
    /// `GET /payment/status`
    PaymentStatus,
    /// `PUT /payment/reverse`
    PaymentReverse,
    /// `PUT /payment/close`
    PaymentClose,
    /// `PUT /payment/refund`
    PaymentRefund,
    /// `POST /echo`
    Echo,
    /// `GET /echo`
    EchoGet,
    /// `POST /oneclick/init`
    OneClickInit,
    /// `POST /oneclick/start`
    OneClickStart,
    /// `POST /oneclick/echo`
    OneClickEcho,
    /// `POST /googlepay/init`
    GooglePayInit,
    /// `POST /googlepay/process`
    GooglePayProcess,
    /// `POST /googlepay/echo`
    GooglePayEcho,
    /// `POST /applepay/init`
    ApplePayInit,
    /// `POST /applepay/process`
    ApplePayProcess,
    /// `POST /applepay/echo`
    ApplePayEcho,
}

/// Static description of one operation
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    pub method: HttpMethod,
    /// Path relative to the gate URL
    pub path: &'static str,
    /// Layout the request signature covers
    pub request: MessageLayout,
    /// `None` for operations whose response is not read (the redirect)
    pub response: Option<MessageLayout>,
    /// Short name used in log events
    pub label: &'static str,
}

const fn op(
    method: HttpMethod,
    path: &'static str,
    request: MessageLayout,
    response: Option<MessageLayout>,
    label: &'static str,
) -> OperationSpec {
    OperationSpec {
        method,
        path,
        request,
        response,
        label,
    }
}

impl Operation {
    /// Every operation, in table order
    pub const ALL: [Operation; 17] = [
        Self::PaymentInit,
        Self::PaymentProcess,
        Self::PaymentStatus,
        Self::PaymentReverse,
        Self::PaymentClose,
        Self::PaymentRefund,
        Self::Echo,
        Self::EchoGet,
        Self::OneClickInit,
        Self::OneClickStart,
        Self::OneClickEcho,
        Self::GooglePayInit,
        Self::GooglePayProcess,
        Self::GooglePayEcho,
        Self::ApplePayInit,
        Self::ApplePayProcess,
        Self::ApplePayEcho,
    ];

    /// Table entry for this operation
    pub fn spec(&self) -> OperationSpec {
        use HttpMethod::{Get, Post, Put};
        use crate::canonical::*;

        match self {
            Self::PaymentInit => op(Post, "/payment/init", INIT_REQUEST, Some(RESULT), "payment init"),
            Self::PaymentProcess => op(Get, "/payment/process", PAYMENT_CHALLENGE, None, "payment process"),
            Self::PaymentStatus => op(Get, "/payment/status", PAYMENT_CHALLENGE, Some(STATUS_RESULT), "payment status"),
            Self::PaymentReverse => op(Put, "/payment/reverse", PAYMENT_CHALLENGE, Some(RESULT), "payment reverse"),
            Self::PaymentClose => op(Put, "/payment/close", AMOUNT_CHALLENGE, Some(RESULT), "payment close"),
            Self::PaymentRefund => op(Put, "/payment/refund", AMOUNT_CHALLENGE, Some(RESULT), "payment refund"),
            Self::Echo => op(Post, "/echo", ECHO_CHALLENGE, Some(ECHO_RESULT), "echo"),
            Self::EchoGet => op(Get, "/echo", ECHO_CHALLENGE, Some(ECHO_RESULT), "echo-get"),
            Self::OneClickInit => op(Post, "/oneclick/init", INIT_REQUEST, Some(RESULT), "one-click init"),
            Self::OneClickStart => op(Post, "/oneclick/start", PAYMENT_CHALLENGE, Some(RESULT), "one-click start"),
            Self::OneClickEcho => op(Post, "/oneclick/echo", ONE_CLICK_ECHO_CHALLENGE, Some(RESULT), "one-click echo"),
            Self::GooglePayInit => op(Post, "/googlepay/init", APP_PAY_INIT_REQUEST, Some(RESULT), "Google Pay init"),
            Self::GooglePayProcess => op(Post, "/googlepay/process", PAYMENT_CHALLENGE, Some(RESULT), "Google Pay process"),
            Self::GooglePayEcho => op(Post, "/googlepay/echo", ECHO_CHALLENGE, Some(ECHO_RESULT), "Google Pay echo"),
            Self::ApplePayInit => op(Post, "/applepay/init", APP_PAY_INIT_REQUEST, Some(RESULT), "Apple Pay init"),
            Self::ApplePayProcess => op(Post, "/applepay/process", PAYMENT_CHALLENGE, Some(RESULT), "Apple Pay process"),
            Self::ApplePayEcho => op(Post, "/applepay/echo", ECHO_CHALLENGE, Some(ECHO_RESULT), "Apple Pay echo"),
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.spec().method
    }

    pub fn path(&self) -> &'static str {
        self.spec().path
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Whether the signed fields travel in the URL path instead of a body
    pub fn is_path_embedded(&self) -> bool {
        self.method() == HttpMethod::Get
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

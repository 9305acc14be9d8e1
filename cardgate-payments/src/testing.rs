//! Test doubles shared by the unit tests

use crate::canonical::{self, MessageLayout};
use crate::dttm::SteppingClock;
use crate::logger::GatewayLogger;
use crate::signature::{HashAlgorithm, MessageSigner};
use crate::transport::{GatewayTransport, TransportError, TransportRequest, TransportResponse};
use crate::{GatewayConfig, PaymentGateway};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const MERCHANT_KEY: &str = include_str!("../tests/fixtures/merchant.key");
pub const MERCHANT_PUB: &str = include_str!("../tests/fixtures/merchant.pub");
pub const GATEWAY_KEY: &str = include_str!("../tests/fixtures/gateway.key");
pub const GATEWAY_PUB: &str = include_str!("../tests/fixtures/gateway.pub");
pub const OTHER_KEY: &str = include_str!("../tests/fixtures/other.key");
pub const OTHER_PUB: &str = include_str!("../tests/fixtures/other.pub");

pub const GATE_URL: &str = "https://gate.example/api/v1.7";
pub const MERCHANT_ID: &str = "M1MIPS0000";
pub const CALLBACK_URL: &str = "https://shop.example/return";

/// Sign a response body the way the gateway would
pub fn gateway_signed(mut body: Value, layout: &MessageLayout, key: &str) -> Value {
    let signer = MessageSigner::from_pem(key, HashAlgorithm::Sha1).unwrap();
    let signature = signer.sign(&canonical::canonicalize(&body, layout)).unwrap();
    body["signature"] = Value::String(signature);
    body
}

/// Transport replaying scripted responses and recording requests
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, String>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(200, body.to_string())));
        self
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayTransport for MockTransport {
    async fn exchange(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err("no scripted response".into()),
        }
    }
}

/// Logger keeping every event for assertions
#[derive(Debug, Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(String, String, Value)>>,
}

impl RecordingLogger {
    pub fn errors(&self) -> Vec<(String, Value)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _, _)| level == "error")
            .map(|(_, message, context)| (message.clone(), context.clone()))
            .collect()
    }

    pub fn infos(&self) -> Vec<(String, Value)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _, _)| level == "info")
            .map(|(_, message, context)| (message.clone(), context.clone()))
            .collect()
    }
}

impl GatewayLogger for RecordingLogger {
    fn info(&self, message: &str, context: &Value) {
        self.events
            .lock()
            .unwrap()
            .push(("info".to_string(), message.to_string(), context.clone()));
    }

    fn error(&self, message: &str, context: &Value) {
        self.events
            .lock()
            .unwrap()
            .push(("error".to_string(), message.to_string(), context.clone()));
    }
}

pub fn config(logger: Arc<RecordingLogger>) -> GatewayConfig {
    GatewayConfig::builder()
        .gate_url(GATE_URL)
        .merchant_id(MERCHANT_ID)
        .callback_url(CALLBACK_URL)
        .private_key(MERCHANT_KEY)
        .gateway_public_key(GATEWAY_PUB)
        .merchant_public_key(MERCHANT_PUB)
        .logger(logger)
        .build()
        .unwrap()
}

/// Gateway over a mock transport with a clock starting at 2024-10-19 08:15:00
pub fn gateway() -> (PaymentGateway, Arc<MockTransport>, Arc<RecordingLogger>) {
    let transport = Arc::new(MockTransport::new());
    let logger = Arc::new(RecordingLogger::default());
    let start = NaiveDate::from_ymd_opt(2024, 10, 19)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();

    let gateway = PaymentGateway::builder(config(logger.clone()))
        .transport(transport.clone())
        .clock(Arc::new(SteppingClock::new(start)))
        .build()
        .unwrap();

    (gateway, transport, logger)
}

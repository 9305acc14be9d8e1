//! HTTP transport seam
//!
//! The gateway client only needs one request/response exchange per call. That
//! exchange is abstracted behind [`GatewayTransport`] so tests and callers with
//! their own HTTP stack can swap it out; [`HttpTransport`] is the `reqwest`
//! implementation used by default.

use crate::{PaymentError, PaymentResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Error produced by a transport, passed through to callers unmodified
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP methods used by the gateway API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Upper-case method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body for POST and PUT
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Create a request with a JSON body
    pub fn with_body(method: HttpMethod, url: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Raw response as received
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as a JSON object
    pub fn json_object(&self) -> PaymentResult<Value> {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(value @ Value::Object(_)) => Ok(value),
            Ok(_) => Err(PaymentError::InvalidResponse {
                status: self.status,
                message: "response body is not a JSON object".to_string(),
            }),
            Err(e) => Err(PaymentError::InvalidResponse {
                status: self.status,
                message: format!("response body is not JSON: {}", e),
            }),
        }
    }
}

/// Request/response exchanger used by the gateway client
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// Send a request and return the raw response
    async fn exchange(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: GatewayTransport + ?Sized> GatewayTransport for Arc<T> {
    async fn exchange(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).exchange(request).await
    }
}

/// Configuration of the `reqwest` transport
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Total request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Headers sent with every request.
    pub default_headers: Vec<(String, String)>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("cardgate/{}", env!("CARGO_PKG_VERSION")),
            default_headers: Vec::new(),
        }
    }
}

impl HttpTransportConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HttpTransportConfigBuilder {
        HttpTransportConfigBuilder::default()
    }
}

/// Builder for [`HttpTransportConfig`].
#[derive(Debug, Default)]
pub struct HttpTransportConfigBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportConfigBuilder {
    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add a default header for all requests.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpTransportConfig {
        self.config
    }
}

/// [`GatewayTransport`] over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: Arc<HttpTransportConfig>,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: HttpTransportConfig) -> PaymentResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| PaymentError::Config(format!("invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| PaymentError::Config(format!("invalid header value: {}", e)))?;
            headers.insert(name, value);
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| PaymentError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn exchange(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "Sending gateway request");

        let builder = match request.method {
            HttpMethod::Get => self.inner.get(&request.url),
            HttpMethod::Post => self.inner.post(&request.url),
            HttpMethod::Put => self.inner.put(&request.url),
        };
        let builder = match request.body {
            Some(ref body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Received gateway response");

        Ok(TransportResponse { status, body })
    }
}

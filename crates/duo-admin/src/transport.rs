//! Transport layer: the boundary between the client and the network.
//!
//! The client hands a [`Transport`] a verb, a fully encoded path and a
//! wire-ready [`Params`]; it gets back a [`RawResponse`] or a
//! [`TransportError`]. Signing, TLS and timeouts all live behind this trait.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, DATE, HeaderMap, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::params::Params;
use crate::signing::{self, Credentials};

/// HTTP verbs used by the Admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Upper-case verb name.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client failed (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be prepared.
    #[error("Invalid request: {0}")]
    Request(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// A response as received, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Status reason phrase.
    pub reason: String,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Build a response with the canonical reason phrase for `status`.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            reason,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Build a JSON response.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string()).with_content_type("application/json")
    }

    /// Set the `Content-Type` header.
    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self
    }

    /// The `Content-Type` header, if present and valid UTF-8.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers requests to the Admin API.
///
/// Implementations must be safe to share between tasks; the client calls
/// them concurrently without any locking of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response round trip.
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<RawResponse, TransportError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP transport
// ─────────────────────────────────────────────────────────────────────────────

/// Signed HTTPS transport backed by reqwest.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    host: String,
    credentials: Credentials,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for `base_url`.
    ///
    /// The host that gets signed is taken from `base_url`, with the port
    /// appended when it is not the scheme default.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, TransportError> {
        let host = signed_host(&base_url)?;
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            base_url,
            host,
            credentials,
            timeout,
        })
    }

    /// The host name requests are signed for.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Host (and non-default port) of a base URL.
pub(crate) fn signed_host(base_url: &Url) -> Result<String, TransportError> {
    let host = base_url
        .host_str()
        .ok_or_else(|| TransportError::Request(format!("no host in `{base_url}`")))?;
    Ok(match base_url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<RawResponse, TransportError> {
        let date = chrono::Utc::now().to_rfc2822();
        let canon_params = signing::canonical_params(params);
        let canon = signing::canonical_request(&date, method, &self.host, path, &canon_params);
        let authorization = signing::authorization(&self.credentials, &canon)?;

        let mut url = self.base_url.join(path)?;
        let request = match method {
            Method::Get | Method::Delete => {
                if !canon_params.is_empty() {
                    url.set_query(Some(&canon_params));
                }
                self.http.request(method.into(), url)
            }
            Method::Post => self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(canon_params),
        };

        let response = request
            .header(AUTHORIZATION, authorization)
            .header(DATE, date)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mock transport
// ─────────────────────────────────────────────────────────────────────────────

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

/// An in-memory transport for testing.
///
/// Returns queued responses in order and records every request. When the
/// queue is empty a [`TransportError::Other`] is returned.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that will return `responses` in order.
    pub fn with_responses(responses: Vec<RawResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response.
    pub fn push(&self, response: RawResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queue a `{"stat": "OK", "response": ...}` envelope.
    pub fn push_ok(&self, payload: serde_json::Value) {
        self.push(RawResponse::json(
            200,
            &serde_json::json!({ "stat": "OK", "response": payload }),
        ));
    }

    /// Queue a transport-level failure.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.responses.lock().push_back(Err(message.into()));
    }

    /// All requests made so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests made.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<RawResponse, TransportError> {
        self.requests.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            params: params.clone(),
        });

        match self.responses.lock().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other(message)),
            None => Err(TransportError::Other(
                "MockTransport: no more responses available".to_string(),
            )),
        }
    }
}

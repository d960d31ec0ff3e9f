//! Response normalization.
//!
//! Every JSON response is wrapped in an envelope:
//!
//! ```json
//! {"stat": "OK", "response": ...}
//! {"stat": "FAIL", "code": 40401, "message": "Resource not found", "message_detail": "..."}
//! ```
//!
//! Success unwraps to the `response` value untouched. Anything else becomes an
//! [`ApiError`].

use bytes::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ErrorDetail, Result};
use crate::transport::RawResponse;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The `response` member of a success envelope.
    Json(Value),
    /// Raw bytes of a binary resource, e.g. an image.
    Binary(Bytes),
}

impl Payload {
    /// The JSON value, if this is a JSON payload.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Binary(_) => None,
        }
    }

    /// The raw bytes, if this is a binary payload.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Payload::Binary(bytes) => Some(bytes),
            Payload::Json(_) => None,
        }
    }

    /// Whether this is a binary payload.
    pub fn is_binary(&self) -> bool {
        matches!(self, Payload::Binary(_))
    }
}

/// One row returned by a log endpoint.
pub type LogRecord = Map<String, Value>;

#[derive(Debug, Deserialize)]
struct Envelope {
    stat: String,
    #[serde(default)]
    response: Value,
    #[serde(flatten)]
    error: ErrorDetail,
}

const STAT_OK: &str = "OK";
const STAT_FAIL: &str = "FAIL";

/// Interpret a response, allowing a binary body when `allow_binary` is set.
///
/// A successful response whose content type starts with `image/` is returned
/// as [`Payload::Binary`] without touching the body; everything else goes
/// through [`decode_envelope`].
pub fn normalize(response: RawResponse, allow_binary: bool) -> Result<Payload> {
    if allow_binary
        && response.is_success()
        && response
            .content_type()
            .is_some_and(|ct| ct.starts_with("image/"))
    {
        return Ok(Payload::Binary(response.body));
    }
    decode_envelope(&response).map(Payload::Json)
}

/// Unwrap a JSON envelope, returning its `response` member.
pub fn decode_envelope(response: &RawResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(failure(response).into());
    }

    let envelope: Envelope = serde_json::from_slice(&response.body)
        .map_err(|_| bad_response(response))?;

    if envelope.stat != STAT_OK {
        let message = envelope.error.message.clone().unwrap_or_else(|| {
            format!(
                "Received error response: {}",
                String::from_utf8_lossy(&response.body)
            )
        });
        return Err(ApiError {
            message,
            status: response.status,
            reason: response.reason.clone(),
            detail: Some(envelope.error),
        }
        .into());
    }

    Ok(envelope.response)
}

/// Unwrap a log endpoint response into its rows.
pub fn log_rows(response: &RawResponse) -> Result<Vec<LogRecord>> {
    let payload = decode_envelope(response)?;
    serde_json::from_value(payload).map_err(|_| bad_response(response).into())
}

/// Tag every row with its event type and the host it came from.
///
/// Only `eventtype` and `host` are written; rows are neither reordered nor
/// filtered.
pub fn decorate_rows(rows: &mut [LogRecord], event_type: &str, host: &str) {
    for row in rows {
        row.insert("eventtype".to_string(), Value::String(event_type.to_string()));
        row.insert("host".to_string(), Value::String(host.to_string()));
    }
}

/// Build the error for a non-2xx response.
fn failure(response: &RawResponse) -> ApiError {
    let detail = serde_json::from_slice::<Envelope>(&response.body)
        .ok()
        .filter(|e| e.stat == STAT_FAIL)
        .map(|e| e.error);

    let message = match detail.as_ref().and_then(|d| d.message.as_deref()) {
        Some(text) => {
            let mut message = format!("Received {} {text}", response.status);
            if let Some(extra) = detail.as_ref().and_then(|d| d.message_detail.as_deref()) {
                message.push_str(&format!(" ({extra})"));
            }
            message
        }
        None => format!("Received {} {}", response.status, response.reason),
    };

    ApiError {
        message,
        status: response.status,
        reason: response.reason.clone(),
        detail,
    }
}

fn bad_response(response: &RawResponse) -> ApiError {
    ApiError {
        message: format!(
            "Received bad response: {}",
            String::from_utf8_lossy(&response.body)
        ),
        status: response.status,
        reason: response.reason.clone(),
        detail: None,
    }
}

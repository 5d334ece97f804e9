//! Transport-level helpers shared by the browser client and tests.
//!
//! # Design
//! - HTTP status codes are never inspected; every response body is handed to the caller.
//! - Only failures without a response become [`ApiError`]s.
//! - Bodies that are not JSON are kept as raw text rather than rejected.

use crate::config::TransportPolicy;
use crate::error::ApiError;
use serde_json::Value;

/// Browser error code for a TLS client-certificate rejection.
pub const TLS_CLIENT_CERT_ERROR_CODE: &str = "ERR_BAD_SSL_CLIENT_AUTH_CERT";

/// Headers sent with every GET. All are CORS-safelisted, so no preflight is issued.
pub const REQUEST_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

/// Classify a rejected fetch from the error name and message the browser reported.
///
/// Browsers usually report only `TypeError: Failed to fetch`, so the TLS code
/// matches only where the runtime surfaces net error names.
#[must_use]
pub fn classify_transport_error(name: &str, message: &str) -> ApiError {
    if name.contains(TLS_CLIENT_CERT_ERROR_CODE) || message.contains(TLS_CLIENT_CERT_ERROR_CODE) {
        return ApiError::TlsClientCertificate {
            message: message.to_string(),
        };
    }
    let code = (!name.trim().is_empty()).then(|| name.to_string());
    ApiError::Network {
        code,
        message: message.to_string(),
    }
}

/// Decode a response body: JSON when it parses, the raw text otherwise, `null` when empty.
#[must_use]
pub fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Response as read off the wire, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code. Recorded but never inspected.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// Turn a fetch outcome into the value handed to callers.
///
/// Any status yields the decoded body. Transport errors go through `policy`.
///
/// # Errors
///
/// Returns the transport error unless `policy` swallows it.
pub fn settle(
    policy: TransportPolicy,
    outcome: Result<RawResponse, ApiError>,
) -> Result<Value, ApiError> {
    policy.recover(outcome.map(|response| decode_body(&response.body)))
}

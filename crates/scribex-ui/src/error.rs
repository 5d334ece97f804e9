//! Error types for the web client.

use thiserror::Error;

/// Failure raised while talking to the ScribeX API.
///
/// HTTP status codes never produce an `ApiError`; only failures that happen
/// before or independent of a response do.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Fetch rejected before a response arrived (offline, DNS, CORS, reset).
    #[error("{message}")]
    Network {
        /// Error name or code reported by the browser, when present.
        code: Option<String>,
        /// Human readable message reported by the browser.
        message: String,
    },
    /// The TLS handshake rejected the client certificate.
    #[error("{message}")]
    TlsClientCertificate {
        /// Human readable message reported by the browser.
        message: String,
    },
    /// Request could not be constructed.
    #[error("invalid request: {0}")]
    Request(String),
    /// Response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl ApiError {
    /// Whether this error was raised by the TLS client-certificate check.
    #[must_use]
    pub const fn is_tls_client_certificate(&self) -> bool {
        matches!(self, Self::TlsClientCertificate { .. })
    }
}

/// Errors raised while reading build-time configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// API base URL was not an absolute http(s) URL.
    #[error("invalid API base URL")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
    },
    /// Deployment environment name was not recognised.
    #[error("unknown environment")]
    UnknownEnvironment {
        /// Offending value.
        value: String,
    },
    /// Role name was not recognised.
    #[error("unknown user role")]
    UnknownRole {
        /// Offending value.
        value: String,
    },
    /// Boolean flag was not `true` or `false`.
    #[error("invalid boolean flag")]
    InvalidFlag {
        /// Name of the flag.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

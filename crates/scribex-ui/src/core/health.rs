//! API connection check state and driver.
//!
//! # Design
//! - One [`HealthCheck`] value is owned by each widget and replaced wholesale per attempt.
//! - Responses are applied in arrival order; a slow earlier request may overwrite a later one.
//! - The health source is a trait so the driver can run against a test double natively.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to connect to API";

/// Lifecycle of a single API connection check.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HealthCheck {
    /// No attempt has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The API answered; payload is kept verbatim.
    Success(Value),
    /// The request failed before a response arrived.
    Failure(String),
}

impl HealthCheck {
    /// Map a check outcome to the terminal state it produces.
    #[must_use]
    pub fn from_outcome(outcome: Result<Value, ApiError>) -> Self {
        match outcome {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Failure(failure_message(&err)),
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Pretty-printed payload for the success panel.
    #[must_use]
    pub fn payload_text(&self) -> Option<String> {
        match self {
            Self::Success(payload) => Some(pretty_payload(payload)),
            _ => None,
        }
    }

    /// Message for the error panel.
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Typed view over the success payload, when it has the expected shape.
    #[must_use]
    pub fn summary(&self) -> Option<HealthSummary> {
        match self {
            Self::Success(payload) => HealthSummary::from_payload(payload),
            _ => None,
        }
    }
}

/// Error text for the widget, falling back to [`FALLBACK_ERROR_MESSAGE`].
#[must_use]
pub fn failure_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Two-space indented JSON, keys in the order they were received.
#[must_use]
pub fn pretty_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

/// Fields the backend reports from `/health`. All optional; unknown keys ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthSummary {
    /// Overall status, e.g. `healthy`.
    pub status: Option<String>,
    /// Backend version.
    pub version: Option<String>,
    /// Database connectivity, e.g. `connected`.
    pub database: Option<String>,
    /// Deployment environment name.
    pub environment: Option<String>,
}

impl HealthSummary {
    /// Decode from an untyped payload. Non-objects and mistyped fields yield `None`.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Option<Self> {
        if !payload.is_object() {
            return None;
        }
        Self::deserialize(payload).ok()
    }
}

/// Badge tone for a reported status string.
#[must_use]
pub fn status_tone(status: &str) -> &'static str {
    match status {
        "ok" | "healthy" | "connected" => "ok",
        "warn" | "warning" | "degraded" | "not configured" => "warn",
        "error" | "failed" | "unhealthy" | "disconnected" => "error",
        _ => "subtle",
    }
}

/// Source of health responses.
#[async_trait(?Send)]
pub trait HealthSource {
    /// Perform one `/health` request.
    async fn check_health(&self) -> Result<Value, ApiError>;
}

/// Run one check: emit [`HealthCheck::Loading`], await `source`, emit the outcome.
pub async fn run_health_check<P, F>(source: &P, update: F)
where
    P: HealthSource + ?Sized,
    F: Fn(HealthCheck),
{
    update(HealthCheck::Loading);
    let outcome = source.check_health().await;
    update(HealthCheck::from_outcome(outcome));
}

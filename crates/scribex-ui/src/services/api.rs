//! HTTP client helpers (REST).

use crate::config::{HEALTH_PATH, TransportPolicy, UiConfig};
use crate::core::health::HealthSource;
use crate::error::ApiError;
use crate::services::transport::{
    REQUEST_HEADERS, RawResponse, classify_transport_error, settle,
};
use async_trait::async_trait;
use gloo::console;
use gloo_net::http::Request;
use serde_json::Value;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) policy: TransportPolicy,
}

impl ApiClient {
    pub(crate) fn new(config: &UiConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            policy: config.transport,
        }
    }

    /// GET `path` and read the body, whatever the status.
    async fn get_raw(&self, path: &str) -> Result<RawResponse, ApiError> {
        let mut request = Request::get(&format!("{}{}", self.base_url, path));
        for (name, value) in REQUEST_HEADERS {
            request = request.header(name, value);
        }
        let response = request
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Body(err.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait(?Send)]
impl HealthSource for ApiClient {
    async fn check_health(&self) -> Result<Value, ApiError> {
        let outcome = self.get_raw(HEALTH_PATH).await;
        if let Err(err) = &outcome {
            console::error!("API error", err.to_string());
            if err.is_tls_client_certificate() && self.policy.ignore_tls_client_cert_errors {
                console::warn!("TLS client certificate error ignored (development mode)");
            }
        }
        settle(self.policy, outcome)
    }
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(js) => classify_transport_error(&js.name, &js.message),
        other => ApiError::Request(other.to_string()),
    }
}

//! Build-time configuration for the web client.
//!
//! # Design
//! - Values are baked into the wasm bundle with `option_env!` when it is compiled.
//! - Parsing goes through [`UiConfig::from_lookup`] so tests can inject any source.
//! - Unset values fall back to local development defaults.

use crate::core::layout::UserRole;
use crate::error::{ApiError, ConfigError};
use serde_json::Value;

/// API base URL override.
pub const API_URL_KEY: &str = "SCRIBEX_API_URL";
/// Deployment environment (`development` or `production`).
pub const ENVIRONMENT_KEY: &str = "SCRIBEX_ENV";
/// Override for [`TransportPolicy::ignore_tls_client_cert_errors`].
pub const IGNORE_TLS_CLIENT_CERT_KEY: &str = "SCRIBEX_IGNORE_TLS_CLIENT_CERT";
/// Initial user role.
pub const USER_ROLE_KEY: &str = "SCRIBEX_USER_ROLE";

/// Base URL used when [`API_URL_KEY`] is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Path of the health endpoint, relative to the base URL.
pub const HEALTH_PATH: &str = "/health";

/// Deployment environment the bundle was built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl Environment {
    /// Parse an environment name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] for unrecognised names.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownEnvironment {
                value: value.to_string(),
            }),
        }
    }

    /// Whether this is a production build.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// How transport failures are treated before they reach callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportPolicy {
    /// Resolve TLS client-certificate failures as an empty response instead of an error.
    pub ignore_tls_client_cert_errors: bool,
}

impl TransportPolicy {
    /// Every transport error propagates.
    pub const STRICT: Self = Self {
        ignore_tls_client_cert_errors: false,
    };

    /// Default policy: lenient outside production, strict in production.
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        Self {
            ignore_tls_client_cert_errors: !environment.is_production(),
        }
    }

    /// Apply the policy to a transport result.
    ///
    /// A swallowed TLS client-certificate error resolves with `null`, the
    /// absent body of the partial response.
    ///
    /// # Errors
    ///
    /// Returns the original error unless the policy swallows it.
    pub fn recover(self, result: Result<Value, ApiError>) -> Result<Value, ApiError> {
        match result {
            Err(err) if err.is_tls_client_certificate() && self.ignore_tls_client_cert_errors => {
                Ok(Value::Null)
            }
            other => other,
        }
    }
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// API base URL without a trailing slash.
    pub api_base_url: String,
    /// Environment the bundle targets.
    pub environment: Environment,
    /// Transport error policy.
    pub transport: TransportPolicy,
    /// Role used for the layout decision.
    pub role: UserRole,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: Environment::default(),
            transport: TransportPolicy::default(),
            role: UserRole::default(),
        }
    }
}

impl UiConfig {
    /// Configuration baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any baked-in value is invalid.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            API_URL_KEY => option_env!("SCRIBEX_API_URL"),
            ENVIRONMENT_KEY => option_env!("SCRIBEX_ENV"),
            IGNORE_TLS_CLIENT_CERT_KEY => option_env!("SCRIBEX_IGNORE_TLS_CLIENT_CERT"),
            USER_ROLE_KEY => option_env!("SCRIBEX_USER_ROLE"),
            _ => None,
        })
    }

    /// Build a configuration from a key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first invalid value.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let read = |key: &str| lookup(key).map(str::trim).filter(|value| !value.is_empty());

        let api_base_url = read(API_URL_KEY).map_or_else(
            || Ok(DEFAULT_API_BASE_URL.to_string()),
            normalize_base_url,
        )?;
        let environment = read(ENVIRONMENT_KEY)
            .map(Environment::parse)
            .transpose()?
            .unwrap_or_default();
        let mut transport = TransportPolicy::for_environment(environment);
        if let Some(value) = read(IGNORE_TLS_CLIENT_CERT_KEY) {
            transport.ignore_tls_client_cert_errors = parse_flag(IGNORE_TLS_CLIENT_CERT_KEY, value)?;
        }
        let role = read(USER_ROLE_KEY)
            .map(str::parse::<UserRole>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            api_base_url,
            environment,
            transport,
            role,
        })
    }

    /// Absolute URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}{HEALTH_PATH}", self.api_base_url)
    }
}

fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"].iter().any(|scheme| {
        trimmed
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && trimmed.len() > scheme.len()
    });
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl {
            value: value.to_string(),
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> Result<UiConfig, ConfigError> {
        let map: HashMap<&str, &'static str> = pairs.iter().copied().collect();
        UiConfig::from_lookup(|key| map.get(key).copied())
    }

    #[test]
    fn unset_values_use_local_development_defaults() -> Result<(), ConfigError> {
        let config = lookup(&[])?;
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.health_url(), "http://localhost:8000/health");
        assert!(config.transport.ignore_tls_client_cert_errors);
        assert_eq!(config.role, UserRole::Student);
        Ok(())
    }

    #[test]
    fn base_url_override_is_trimmed() -> Result<(), ConfigError> {
        let config = lookup(&[(API_URL_KEY, " https://api.scribex.test/ ")])?;
        assert_eq!(config.health_url(), "https://api.scribex.test/health");
        let blank = lookup(&[(API_URL_KEY, "   ")])?;
        assert_eq!(blank.api_base_url, DEFAULT_API_BASE_URL);
        Ok(())
    }

    #[test]
    fn base_url_must_be_http() {
        assert_eq!(
            lookup(&[(API_URL_KEY, "ftp://example")]),
            Err(ConfigError::InvalidBaseUrl {
                value: "ftp://example".to_string()
            })
        );
        assert!(lookup(&[(API_URL_KEY, "http://")]).is_err());
    }

    #[test]
    fn production_is_strict_unless_overridden() -> Result<(), ConfigError> {
        let prod = lookup(&[(ENVIRONMENT_KEY, "production")])?;
        assert_eq!(prod.environment, Environment::Production);
        assert_eq!(prod.transport, TransportPolicy::STRICT);

        let lenient = lookup(&[
            (ENVIRONMENT_KEY, "prod"),
            (IGNORE_TLS_CLIENT_CERT_KEY, "true"),
        ])?;
        assert!(lenient.transport.ignore_tls_client_cert_errors);

        let strict_dev = lookup(&[(IGNORE_TLS_CLIENT_CERT_KEY, "off")])?;
        assert_eq!(strict_dev.transport, TransportPolicy::STRICT);
        Ok(())
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            lookup(&[(ENVIRONMENT_KEY, "staging")]),
            Err(ConfigError::UnknownEnvironment { .. })
        ));
        assert!(matches!(
            lookup(&[(IGNORE_TLS_CLIENT_CERT_KEY, "maybe")]),
            Err(ConfigError::InvalidFlag { key, .. }) if key == IGNORE_TLS_CLIENT_CERT_KEY
        ));
        assert!(matches!(
            lookup(&[(USER_ROLE_KEY, "robot")]),
            Err(ConfigError::UnknownRole { .. })
        ));
    }

    #[test]
    fn role_override_is_applied() -> Result<(), ConfigError> {
        assert_eq!(lookup(&[(USER_ROLE_KEY, "teacher")])?.role, UserRole::Teacher);
        Ok(())
    }

    #[test]
    fn policy_swallows_only_tls_client_cert_errors() {
        let tls = || -> Result<Value, ApiError> {
            Err(ApiError::TlsClientCertificate {
                message: "ERR_BAD_SSL_CLIENT_AUTH_CERT".to_string(),
            })
        };
        let lenient = TransportPolicy::for_environment(Environment::Development);
        assert_eq!(lenient.recover(tls()), Ok(Value::Null));
        assert_eq!(TransportPolicy::STRICT.recover(tls()), tls());

        let network = Err(ApiError::Network {
            code: None,
            message: "Network Error".to_string(),
        });
        assert_eq!(lenient.recover(network.clone()), network);
        assert_eq!(
            lenient.recover(Ok(json!({"status": "healthy"}))),
            Ok(json!({"status": "healthy"}))
        );
    }
}

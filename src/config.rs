//! Client configuration.
//!
//! [`ClientConfig`] is a plain, deserializable description of a client, suitable
//! for loading from a config file. It maps onto
//! [`ShrimpyRestClientBuilder`](crate::rest::ShrimpyRestClientBuilder).

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::auth::StaticCredentials;
use crate::error::ShrimpyError;
use crate::rest::{SHRIMPY_BASE_URL, ShrimpyRestClient, ShrimpyRestClientBuilder};

/// Configuration for a [`ShrimpyRestClient`].
///
/// ```rust
/// use shrimpy_api_client::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(
///     r#"{ "masterApiKey": "key", "masterSecretKey": "c2VjcmV0", "timeoutSeconds": 30 }"#,
/// ).unwrap();
/// assert_eq!(config.endpoint, "https://dev-api.shrimpy.io");
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Master API key.
    pub master_api_key: String,
    /// Master API secret, base64 encoded.
    pub master_secret_key: String,
    /// Per-request timeout in seconds. Zero or absent means no timeout.
    #[serde(default)]
    pub timeout_seconds: u64,
    /// Log raw response bodies at debug level.
    #[serde(default)]
    pub debug_messages: bool,
}

fn default_endpoint() -> String {
    SHRIMPY_BASE_URL.to_string()
}

impl ClientConfig {
    /// Create a configuration for the default endpoint.
    pub fn new(master_api_key: impl Into<String>, master_secret_key: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            master_api_key: master_api_key.into(),
            master_secret_key: master_secret_key.into(),
            timeout_seconds: 0,
            debug_messages: false,
        }
    }

    /// Check the configuration for values that can never produce a working client.
    pub fn validate(&self) -> Result<(), ShrimpyError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ShrimpyError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.master_api_key.is_empty() {
            return Err(ShrimpyError::Config("master API key is empty".to_string()));
        }
        if self.master_secret_key.is_empty() {
            return Err(ShrimpyError::Config("master secret key is empty".to_string()));
        }
        Ok(())
    }

    /// Convert into a client builder, so further options can be applied.
    pub fn into_builder(self) -> ShrimpyRestClientBuilder {
        let mut builder = ShrimpyRestClient::builder()
            .base_url(self.endpoint.trim_end_matches('/'))
            .credentials(Arc::new(StaticCredentials::new(
                self.master_api_key,
                self.master_secret_key,
            )))
            .debug_messages(self.debug_messages);
        if self.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(self.timeout_seconds));
        }
        builder
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("master_api_key", &self.master_api_key)
            .field("master_secret_key", &"[REDACTED]")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("debug_messages", &self.debug_messages)
            .finish()
    }
}

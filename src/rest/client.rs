//! Shrimpy REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, normalize_body, sign_request};
use crate::config::ClientConfig;
use crate::error::{ApiError, ShrimpyError};
use crate::rest::endpoints::{
    API_KEY_HEADER, API_NONCE_HEADER, API_SIGNATURE_HEADER, SHRIMPY_BASE_URL,
};
use crate::types::SuccessResponse;

/// The Shrimpy REST API client.
///
/// Every Shrimpy endpoint is signed, so the client needs credentials for any
/// call. Each request draws a fresh nonce from the client's nonce provider;
/// clones share the provider, so they never reuse a nonce.
///
/// # Example
///
/// ```rust,no_run
/// use shrimpy_api_client::rest::ShrimpyRestClient;
/// use shrimpy_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "YXBpX3NlY3JldA=="));
///     let client = ShrimpyRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let exchanges = client.get_supported_exchanges().await?;
///     for exchange in &exchanges {
///         println!("{}: {}", exchange.exchange, exchange.best_case_fee);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ShrimpyRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    debug_messages: bool,
}

impl ShrimpyRestClient {
    /// Create a new client builder.
    pub fn builder() -> ShrimpyRestClientBuilder {
        ShrimpyRestClientBuilder::new()
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self, ShrimpyError> {
        config.validate()?;
        Ok(config.into_builder().build())
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client was configured with credentials.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sign and send a request, returning the raw response body.
    ///
    /// The body is returned whatever the HTTP status; interpreting it is left to
    /// the caller. This is the escape hatch for endpoints without a typed method.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Request path, e.g. `/v1/list_exchanges`
    /// * `query` - Empty, or a query string starting with `?`
    /// * `body` - Optional JSON body; `{}` is sent as an empty body
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<&str>,
    ) -> Result<String, ShrimpyError> {
        let (_, body) = self.dispatch(method, path, query, body).await?;
        Ok(body)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<&str>,
    ) -> Result<(StatusCode, String), ShrimpyError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ShrimpyError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let nonce = self.nonce_provider.next_nonce();
        let body = normalize_body(body);
        let signature = sign_request(creds, path, method.as_str(), nonce, body)?;

        let url = format!("{}{}{}", self.base_url, path, query);
        tracing::debug!(%method, path, query, nonce, "sending signed request");

        let response = self
            .http_client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &creds.api_key)
            .header(API_NONCE_HEADER, nonce.to_string())
            .header(API_SIGNATURE_HEADER, signature)
            .body(body.to_string())
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, %method, path, "request failed"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, %method, path, "failed to read response body"))?;

        if self.debug_messages {
            tracing::debug!(status = status.as_u16(), body = %text, "response received");
        }

        Ok((status, text))
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<&str>,
    ) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.dispatch(method, path, query, body).await?;
        parse_response(status, &body)
    }

    /// Make a signed GET request.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, "", None).await
    }

    /// Make a signed GET request with query parameters.
    ///
    /// Fields the parameters skip when serializing are left out of the query
    /// entirely.
    pub(crate) async fn get_with_params<T, Q>(&self, path: &str, params: &Q) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = query_string(params)?;
        self.request(Method::GET, path, &query, None).await
    }

    /// Make a signed POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        self.request(Method::POST, path, "", Some(&body)).await
    }

    /// Make a signed POST request without a body.
    pub(crate) async fn post_empty<T>(&self, path: &str) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, "", None).await
    }

    /// Make a signed DELETE request.
    pub(crate) async fn delete<T>(&self, path: &str) -> Result<T, ShrimpyError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, path, "", None).await
    }
}

impl std::fmt::Debug for ShrimpyRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShrimpyRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("debug_messages", &self.debug_messages)
            .finish()
    }
}

/// Serialize query parameters, returning `""` or `"?..."`.
pub(crate) fn query_string<Q>(params: &Q) -> Result<String, ShrimpyError>
where
    Q: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| ShrimpyError::InvalidResponse(e.to_string()))?;
    if query.is_empty() {
        Ok(query)
    } else {
        Ok(format!("?{query}"))
    }
}

/// Parse a response from the Shrimpy API.
///
/// - `{"error": "..."}` bodies are API errors whatever the status.
/// - Non-2xx `{"message": "..."}` bodies are API errors.
/// - Any other non-2xx response is an invalid response carrying the body.
pub(crate) fn parse_response<T>(status: StatusCode, body: &str) -> Result<T, ShrimpyError>
where
    T: DeserializeOwned,
{
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        let message = match map.get("error") {
            Some(Value::String(error)) => Some(error.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
        .or_else(|| {
            if status.is_success() {
                None
            } else {
                map.get("message").and_then(Value::as_str).map(str::to_string)
            }
        });

        if let Some(message) = message {
            let mut error = ApiError::new(message).with_status(status.as_u16());
            if let Some(code) = map.get("errorCode").and_then(Value::as_i64) {
                error = error.with_code(code);
            }
            return Err(ShrimpyError::Api(error));
        }
    }

    if !status.is_success() {
        return Err(ShrimpyError::InvalidResponse(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    serde_json::from_str::<T>(body).map_err(|e| {
        ShrimpyError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
    })
}

/// Turn a `{"success": false}` payload into an error.
pub(crate) fn expect_success(
    response: SuccessResponse,
    operation: &str,
) -> Result<(), ShrimpyError> {
    response.into_result(operation).map_err(ShrimpyError::Api)
}

/// Builder for [`ShrimpyRestClient`].
pub struct ShrimpyRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    debug_messages: bool,
}

impl ShrimpyRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: SHRIMPY_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
            debug_messages: false,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a per-request timeout. By default requests never time out.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Log raw response bodies at debug level.
    pub fn debug_messages(mut self, enabled: bool) -> Self {
        self.debug_messages = enabled;
        self
    }

    /// Build the client.
    pub fn build(self) -> ShrimpyRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("shrimpy-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("shrimpy-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build configured HTTP client, using defaults");
            reqwest::Client::new()
        });

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        ShrimpyRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            debug_messages: self.debug_messages,
        }
    }
}

impl Default for ShrimpyRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

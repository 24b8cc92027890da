//! Error types for the Shrimpy client library.

use thiserror::Error;

/// The main error type for all Shrimpy client operations.
#[derive(Error, Debug)]
pub enum ShrimpyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Shrimpy API returned an error
    #[error("Shrimpy API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for signed requests")]
    MissingCredentials,
}

impl ShrimpyError {
    /// Returns the API error if this is a remote API failure.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ShrimpyError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the request never produced a response (connect, TLS, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, ShrimpyError::Http(_) | ShrimpyError::HttpMiddleware(_))
    }
}

/// An error reported by the Shrimpy API itself.
///
/// Shrimpy reports failures as `{"error": "..."}` bodies, usually alongside a
/// 4xx/5xx status, or as `{"success": false}` on mutation endpoints. Trade and
/// order records can also carry their own `errorCode`/`errorMessage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response, when the error came from one.
    pub status: Option<u16>,
    /// Numeric error code, when the API supplied one.
    pub code: Option<i64>,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.status, self.code) {
            (Some(status), _) => write!(f, "HTTP {}: {}", status, self.message),
            (None, Some(code)) => write!(f, "code {}: {}", code, self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    /// Attach the HTTP status this error arrived with.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a numeric error code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Check if the request was rejected for bad credentials or signature.
    pub fn is_authentication(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
            || self.message.contains("API key")
            || self.message.contains("signature")
    }

    /// Check if the request was rejected because the nonce was reused or too low.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message.to_ascii_lowercase().contains("nonce")
    }

    /// Check if the referenced resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

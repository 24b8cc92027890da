//! HMAC-SHA256 signature generation for Shrimpy API authentication.
//!
//! Every Shrimpy request is signed over a pre-hash string:
//! ```text
//! HMAC-SHA256(path + METHOD + nonce + body, base64_decode(api_secret))
//! ```
//!
//! The signature is then base64-encoded and sent in the
//! `DEV-SHRIMPY-API-SIGNATURE` header. The query string is not signed.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::ShrimpyError;

type HmacSha256 = Hmac<Sha256>;

/// Body value treated as "no body" when signing and sending.
const EMPTY_OBJECT: &str = "{}";

/// Normalize a request body for signing.
///
/// An absent body and the literal `{}` both become the empty string, so
/// bodiless GET/DELETE requests and empty-object POSTs sign identically.
pub fn normalize_body(body: Option<&str>) -> &str {
    match body {
        None | Some(EMPTY_OBJECT) => "",
        Some(body) => body,
    }
}

/// Build the pre-hash string for a request.
///
/// ```rust
/// use shrimpy_api_client::auth::prehash;
///
/// assert_eq!(prehash("/v1/list_exchanges", "GET", 1, ""), "/v1/list_exchangesGET1");
/// ```
pub fn prehash(path: &str, method: &str, nonce: u64, body: &str) -> String {
    let body = normalize_body(Some(body));
    let nonce_str = nonce.to_string();

    let mut message = String::with_capacity(path.len() + method.len() + nonce_str.len() + body.len());
    message.push_str(path);
    message.push_str(method);
    message.push_str(&nonce_str);
    message.push_str(body);
    message
}

/// Sign a request for the Shrimpy API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `path` - The request path without query string (e.g., "/v1/list_exchanges")
/// * `method` - The HTTP method in upper case
/// * `nonce` - The nonce value for this request
/// * `body` - The JSON body, or an empty string
///
/// # Returns
///
/// Base64-encoded HMAC-SHA256 signature.
///
/// A secret that is not valid base64 does not fail signing: a warning is logged
/// and an empty key is used, so the server rejects the request with an
/// authentication error instead.
///
/// # Example
///
/// ```rust,no_run
/// use shrimpy_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "YXBpX3NlY3JldA=="); // base64 of "api_secret"
/// let signature = sign_request(&credentials, "/v1/list_exchanges", "GET", 1, "")?;
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    path: &str,
    method: &str,
    nonce: u64,
    body: &str,
) -> Result<String, ShrimpyError> {
    let secret_decoded = BASE64
        .decode(credentials.expose_secret())
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "API secret is not valid base64, signing with an empty key");
            Vec::new()
        });

    let message = prehash(path, method, nonce, body);

    let mut hmac = HmacSha256::new_from_slice(&secret_decoded)
        .map_err(|e| ShrimpyError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(message.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}

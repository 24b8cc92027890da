//! Types for user and API key management endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::Credentials;

/// A user under the master account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User id.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the user may make requests.
    pub is_enabled: bool,
    /// When the user's paid access expires.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expiration_date: Option<OffsetDateTime>,
}

/// Body of the create-user request.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct CreateUserRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

/// Body of the rename-user request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RenameUserRequest<'a> {
    pub name: &'a str,
}

/// Id of a newly created user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    /// User id.
    pub id: String,
}

/// A freshly created user API key pair.
///
/// The private key is only ever returned once, by the create call.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyPair {
    /// Public key.
    pub public_key: String,
    /// Private key, base64 encoded.
    private_key: String,
}

impl ApiKeyPair {
    /// Turn the pair into signing credentials for a per-user client.
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.public_key, self.private_key)
    }
}

impl std::fmt::Debug for ApiKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Permissions granted to a user API key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyPermissions {
    /// May read and manage linked accounts.
    pub account: bool,
    /// May place trades and orders.
    pub trade: bool,
}

impl ApiKeyPermissions {
    /// Full access.
    pub fn all() -> Self {
        Self {
            account: true,
            trade: true,
        }
    }
}

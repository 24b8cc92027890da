//! Types for linked exchange account endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::types::ExchangeApiError;

/// An exchange account linked to a user.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    /// Shrimpy exchange account id.
    pub id: i64,
    /// Exchange identifier.
    pub exchange: String,
    /// Whether a rebalance is running on the account.
    #[serde(default)]
    pub is_rebalancing: bool,
    /// Errors the exchange reported for this account's keys.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub exchange_api_errors: Vec<ExchangeApiError>,
}

/// Request to link an exchange account to a user.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAccountRequest {
    /// Exchange identifier (e.g., "binance").
    pub exchange: String,
    /// Exchange API public key.
    pub public_key: String,
    /// Exchange API private key.
    pub private_key: String,
    /// Exchange API passphrase, for exchanges that use one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

impl LinkAccountRequest {
    /// Create a request without a passphrase.
    pub fn new(
        exchange: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            passphrase: None,
        }
    }

    /// Set the passphrase.
    pub fn passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }
}

impl std::fmt::Debug for LinkAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkAccountRequest")
            .field("exchange", &self.exchange)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Id of a newly linked account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LinkedAccountId {
    /// Shrimpy exchange account id.
    pub id: i64,
}

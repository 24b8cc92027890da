//! Linked exchange account endpoints.

mod types;

pub use types::*;

use crate::error::ShrimpyError;
use crate::rest::ShrimpyRestClient;
use crate::rest::client::expect_success;
use crate::rest::endpoints::accounts;
use crate::types::SuccessResponse;

impl ShrimpyRestClient {
    /// List the exchange accounts linked to a user.
    pub async fn list_accounts(&self, user_id: &str) -> Result<Vec<LinkedAccount>, ShrimpyError> {
        self.get(&accounts::accounts(user_id)).await
    }

    /// Get a single linked account.
    pub async fn get_account(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<LinkedAccount, ShrimpyError> {
        self.get(&accounts::account(user_id, account_id)).await
    }

    /// Link an exchange account to a user.
    ///
    /// Returns the id Shrimpy assigned to the account; trading endpoints are
    /// addressed by it.
    pub async fn link_account(
        &self,
        user_id: &str,
        request: &LinkAccountRequest,
    ) -> Result<LinkedAccountId, ShrimpyError> {
        tracing::debug!(user_id, exchange = %request.exchange, "linking exchange account");
        self.post(&accounts::accounts(user_id), request).await
    }

    /// Unlink an exchange account.
    pub async fn unlink_account(&self, user_id: &str, account_id: i64) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self.delete(&accounts::account(user_id, account_id)).await?;
        expect_success(response, "unlink account")
    }

    /// Get the IP addresses the exchange account must whitelist for Shrimpy.
    pub async fn get_ip_whitelist_addresses(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<String>, ShrimpyError> {
        self.get(&accounts::ip_whitelist_addresses(user_id, account_id))
            .await
    }
}

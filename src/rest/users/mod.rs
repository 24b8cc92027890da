//! User and API key management endpoints.
//!
//! These require the master key pair.

mod types;

pub use types::*;

use crate::error::ShrimpyError;
use crate::rest::ShrimpyRestClient;
use crate::rest::client::expect_success;
use crate::rest::endpoints::users;
use crate::types::SuccessResponse;

impl ShrimpyRestClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, ShrimpyError> {
        self.get(users::USERS).await
    }

    /// Get a single user.
    pub async fn get_user(&self, user_id: &str) -> Result<User, ShrimpyError> {
        self.get(&users::user(user_id)).await
    }

    /// Create a user, optionally with a display name.
    ///
    /// Returns the new user's id.
    pub async fn create_user(&self, name: Option<&str>) -> Result<CreatedUser, ShrimpyError> {
        self.post(users::USERS, &CreateUserRequest { name }).await
    }

    /// Rename a user.
    pub async fn rename_user(&self, user_id: &str, name: &str) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self
            .post(&users::name(user_id), &RenameUserRequest { name })
            .await?;
        expect_success(response, "rename user")
    }

    /// Enable a user.
    pub async fn enable_user(&self, user_id: &str) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self.post_empty(&users::enable(user_id)).await?;
        expect_success(response, "enable user")
    }

    /// Disable a user.
    pub async fn disable_user(&self, user_id: &str) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self.post_empty(&users::disable(user_id)).await?;
        expect_success(response, "disable user")
    }

    /// List the public keys of a user's API keys.
    pub async fn get_api_keys(&self, user_id: &str) -> Result<Vec<String>, ShrimpyError> {
        self.get(&users::keys(user_id)).await
    }

    /// Create a new API key pair for a user.
    ///
    /// New keys start with no permissions; grant them with
    /// [`set_api_key_permissions`](Self::set_api_key_permissions).
    pub async fn create_api_keys(&self, user_id: &str) -> Result<ApiKeyPair, ShrimpyError> {
        self.post_empty(&users::keys(user_id)).await
    }

    /// Delete a user's API key pair.
    pub async fn delete_api_keys(&self, user_id: &str, public_key: &str) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self.delete(&users::key(user_id, public_key)).await?;
        expect_success(response, "delete API keys")
    }

    /// Get the permissions of a user's API key.
    pub async fn get_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
    ) -> Result<ApiKeyPermissions, ShrimpyError> {
        self.get(&users::key_permissions(user_id, public_key)).await
    }

    /// Set the permissions of a user's API key.
    pub async fn set_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
        permissions: &ApiKeyPermissions,
    ) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self
            .post(&users::key_permissions(user_id, public_key), permissions)
            .await?;
        expect_success(response, "set API key permissions")
    }
}

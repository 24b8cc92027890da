//! Shrimpy REST API endpoint paths.

/// Base URL for the Shrimpy developer API.
pub const SHRIMPY_BASE_URL: &str = "https://dev-api.shrimpy.io";

/// Header carrying the public API key.
pub const API_KEY_HEADER: &str = "DEV-SHRIMPY-API-KEY";
/// Header carrying the decimal nonce.
pub const API_NONCE_HEADER: &str = "DEV-SHRIMPY-API-NONCE";
/// Header carrying the base64 signature.
pub const API_SIGNATURE_HEADER: &str = "DEV-SHRIMPY-API-SIGNATURE";

/// Market data endpoints.
pub mod market {
    /// List supported exchanges.
    pub const LIST_EXCHANGES: &str = "/v1/list_exchanges";
    /// Order books across exchanges.
    pub const ORDER_BOOKS: &str = "/v1/orderbooks";

    /// Assets listed on an exchange.
    pub fn assets(exchange: &str) -> String {
        format!("/v1/exchanges/{exchange}/assets")
    }

    /// Trading pairs listed on an exchange.
    pub fn trading_pairs(exchange: &str) -> String {
        format!("/v1/exchanges/{exchange}/trading_pairs")
    }

    /// Tickers for an exchange.
    pub fn ticker(exchange: &str) -> String {
        format!("/v1/exchanges/{exchange}/ticker")
    }

    /// Candlesticks for an exchange.
    pub fn candles(exchange: &str) -> String {
        format!("/v1/exchanges/{exchange}/candles")
    }
}

/// User and API key management endpoints.
pub mod users {
    /// All users under the master key.
    pub const USERS: &str = "/v1/users";

    /// A single user.
    pub fn user(user_id: &str) -> String {
        format!("/v1/users/{user_id}")
    }

    /// Rename a user.
    pub fn name(user_id: &str) -> String {
        format!("/v1/users/{user_id}/name")
    }

    /// Enable a user.
    pub fn enable(user_id: &str) -> String {
        format!("/v1/users/{user_id}/enable")
    }

    /// Disable a user.
    pub fn disable(user_id: &str) -> String {
        format!("/v1/users/{user_id}/disable")
    }

    /// A user's API keys.
    pub fn keys(user_id: &str) -> String {
        format!("/v1/users/{user_id}/keys")
    }

    /// A single API key of a user.
    pub fn key(user_id: &str, public_key: &str) -> String {
        format!("/v1/users/{user_id}/keys/{public_key}")
    }

    /// Permissions of a user's API key.
    pub fn key_permissions(user_id: &str, public_key: &str) -> String {
        format!("/v1/users/{user_id}/keys/{public_key}/permissions")
    }
}

/// Linked exchange account endpoints.
pub mod accounts {
    /// A user's linked accounts.
    pub fn accounts(user_id: &str) -> String {
        format!("/v1/users/{user_id}/accounts")
    }

    /// A single linked account.
    pub fn account(user_id: &str, account_id: i64) -> String {
        format!("/v1/users/{user_id}/accounts/{account_id}")
    }

    /// Addresses the exchange account must whitelist.
    pub fn ip_whitelist_addresses(user_id: &str, account_id: i64) -> String {
        format!("/v1/users/{user_id}/accounts/{account_id}/ip_whitelist_addresses")
    }
}

/// Trading and balance endpoints, scoped to one linked account.
pub mod trading {
    use super::accounts::account;

    /// Trades of an account.
    pub fn trades(user_id: &str, account_id: i64) -> String {
        format!("{}/trades", account(user_id, account_id))
    }

    /// A single trade.
    pub fn trade(user_id: &str, account_id: i64, trade_id: &str) -> String {
        format!("{}/trades/{trade_id}", account(user_id, account_id))
    }

    /// Current balance of an account.
    pub fn balance(user_id: &str, account_id: i64) -> String {
        format!("{}/balance", account(user_id, account_id))
    }

    /// Aggregate balance history of an account.
    pub fn total_balance_history(user_id: &str, account_id: i64) -> String {
        format!("{}/total_balance_history", account(user_id, account_id))
    }

    /// Limit orders of an account.
    pub fn orders(user_id: &str, account_id: i64) -> String {
        format!("{}/orders", account(user_id, account_id))
    }

    /// A single limit order.
    pub fn order(user_id: &str, account_id: i64, order_id: &str) -> String {
        format!("{}/orders/{order_id}", account(user_id, account_id))
    }
}

//! Trait definition for the Shrimpy REST API client.
//!
//! [`ShrimpyClient`] abstracts every REST operation so callers can swap in a
//! mock or a wrapper around [`ShrimpyRestClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shrimpy_api_client::rest::ShrimpyClient;
//!
//! async fn print_exchanges<C: ShrimpyClient>(client: &C) -> Result<(), shrimpy_api_client::ShrimpyError> {
//!     for exchange in client.get_supported_exchanges().await? {
//!         println!("{}", exchange.exchange);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::Future;

use time::OffsetDateTime;

use crate::error::ShrimpyError;
use crate::rest::ShrimpyRestClient;
use crate::rest::accounts::{LinkAccountRequest, LinkedAccount, LinkedAccountId};
use crate::rest::market::{
    Candle, CandlesRequest, ExchangeAsset, MarketOrderBooks, OrderBooksRequest, SupportedExchange,
    Ticker, TradingPair,
};
use crate::rest::trading::{
    AccountBalance, ActiveTrade, BalanceHistoryPoint, BalanceHistoryRequest, CreateTradeRequest,
    LimitOrder, LimitOrderRequest, LimitOrderStatus, OrderId, TradeId, TradeStatus,
};
use crate::rest::users::{ApiKeyPair, ApiKeyPermissions, CreatedUser, User};

/// Trait defining all Shrimpy REST API operations.
///
/// All methods are async and return `Result<T, ShrimpyError>`.
pub trait ShrimpyClient: Send + Sync {
    // ========== Market Data ==========

    /// Get the exchanges Shrimpy supports.
    fn get_supported_exchanges(
        &self,
    ) -> impl Future<Output = Result<Vec<SupportedExchange>, ShrimpyError>> + Send;

    /// Get the assets listed on an exchange.
    fn get_exchange_assets(
        &self,
        exchange: &str,
    ) -> impl Future<Output = Result<Vec<ExchangeAsset>, ShrimpyError>> + Send;

    /// Get the trading pairs listed on an exchange.
    fn get_trading_pairs(
        &self,
        exchange: &str,
    ) -> impl Future<Output = Result<Vec<TradingPair>, ShrimpyError>> + Send;

    /// Get tickers for an exchange.
    fn get_ticker(
        &self,
        exchange: &str,
    ) -> impl Future<Output = Result<Vec<Ticker>, ShrimpyError>> + Send;

    /// Get order books.
    fn get_order_books(
        &self,
        request: &OrderBooksRequest,
    ) -> impl Future<Output = Result<Vec<MarketOrderBooks>, ShrimpyError>> + Send;

    /// Get candlesticks for a pair on an exchange.
    fn get_candles(
        &self,
        exchange: &str,
        request: &CandlesRequest,
    ) -> impl Future<Output = Result<Vec<Candle>, ShrimpyError>> + Send;

    // ========== Users ==========

    /// List all users.
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ShrimpyError>> + Send;

    /// Get a single user.
    fn get_user(&self, user_id: &str) -> impl Future<Output = Result<User, ShrimpyError>> + Send;

    /// Create a user.
    fn create_user(
        &self,
        name: Option<&str>,
    ) -> impl Future<Output = Result<CreatedUser, ShrimpyError>> + Send;

    /// Rename a user.
    fn rename_user(
        &self,
        user_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    /// Enable a user.
    fn enable_user(&self, user_id: &str) -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    /// Disable a user.
    fn disable_user(&self, user_id: &str)
    -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    // ========== API Keys ==========

    /// List the public keys of a user's API keys.
    fn get_api_keys(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, ShrimpyError>> + Send;

    /// Create an API key pair for a user.
    fn create_api_keys(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ApiKeyPair, ShrimpyError>> + Send;

    /// Delete a user's API key pair.
    fn delete_api_keys(
        &self,
        user_id: &str,
        public_key: &str,
    ) -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    /// Get the permissions of an API key.
    fn get_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
    ) -> impl Future<Output = Result<ApiKeyPermissions, ShrimpyError>> + Send;

    /// Set the permissions of an API key.
    fn set_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
        permissions: &ApiKeyPermissions,
    ) -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    // ========== Accounts ==========

    /// List a user's linked exchange accounts.
    fn list_accounts(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<LinkedAccount>, ShrimpyError>> + Send;

    /// Get a single linked account.
    fn get_account(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> impl Future<Output = Result<LinkedAccount, ShrimpyError>> + Send;

    /// Link an exchange account to a user.
    fn link_account(
        &self,
        user_id: &str,
        request: &LinkAccountRequest,
    ) -> impl Future<Output = Result<LinkedAccountId, ShrimpyError>> + Send;

    /// Unlink an exchange account.
    fn unlink_account(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> impl Future<Output = Result<(), ShrimpyError>> + Send;

    /// Get the IP addresses an exchange account must whitelist.
    fn get_ip_whitelist_addresses(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> impl Future<Output = Result<Vec<String>, ShrimpyError>> + Send;

    // ========== Trading ==========

    /// Submit a trade.
    fn create_trade(
        &self,
        user_id: &str,
        account_id: i64,
        request: &CreateTradeRequest,
    ) -> impl Future<Output = Result<TradeId, ShrimpyError>> + Send;

    /// Get a trade's status.
    fn get_trade_status(
        &self,
        user_id: &str,
        account_id: i64,
        trade_id: &str,
    ) -> impl Future<Output = Result<TradeStatus, ShrimpyError>> + Send;

    /// List trades that have not completed.
    fn list_active_trades(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> impl Future<Output = Result<Vec<ActiveTrade>, ShrimpyError>> + Send;

    /// Get account balances, optionally at a past date.
    fn get_balance(
        &self,
        user_id: &str,
        account_id: i64,
        date: Option<OffsetDateTime>,
    ) -> impl Future<Output = Result<AccountBalance, ShrimpyError>> + Send;

    /// Get the account's total value over time.
    fn get_total_balance_history(
        &self,
        user_id: &str,
        account_id: i64,
        request: &BalanceHistoryRequest,
    ) -> impl Future<Output = Result<Vec<BalanceHistoryPoint>, ShrimpyError>> + Send;

    // ========== Limit Orders ==========

    /// Place a limit order.
    fn create_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<OrderId, ShrimpyError>> + Send;

    /// Get a limit order's status.
    fn get_limit_order_status(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> impl Future<Output = Result<LimitOrderStatus, ShrimpyError>> + Send;

    /// List open limit orders.
    fn list_open_orders(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> impl Future<Output = Result<Vec<LimitOrder>, ShrimpyError>> + Send;

    /// Cancel a limit order.
    fn cancel_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> impl Future<Output = Result<(), ShrimpyError>> + Send;
}

impl ShrimpyClient for ShrimpyRestClient {
    async fn get_supported_exchanges(&self) -> Result<Vec<SupportedExchange>, ShrimpyError> {
        ShrimpyRestClient::get_supported_exchanges(self).await
    }

    async fn get_exchange_assets(&self, exchange: &str) -> Result<Vec<ExchangeAsset>, ShrimpyError> {
        ShrimpyRestClient::get_exchange_assets(self, exchange).await
    }

    async fn get_trading_pairs(&self, exchange: &str) -> Result<Vec<TradingPair>, ShrimpyError> {
        ShrimpyRestClient::get_trading_pairs(self, exchange).await
    }

    async fn get_ticker(&self, exchange: &str) -> Result<Vec<Ticker>, ShrimpyError> {
        ShrimpyRestClient::get_ticker(self, exchange).await
    }

    async fn get_order_books(
        &self,
        request: &OrderBooksRequest,
    ) -> Result<Vec<MarketOrderBooks>, ShrimpyError> {
        ShrimpyRestClient::get_order_books(self, request).await
    }

    async fn get_candles(
        &self,
        exchange: &str,
        request: &CandlesRequest,
    ) -> Result<Vec<Candle>, ShrimpyError> {
        ShrimpyRestClient::get_candles(self, exchange, request).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ShrimpyError> {
        ShrimpyRestClient::list_users(self).await
    }

    async fn get_user(&self, user_id: &str) -> Result<User, ShrimpyError> {
        ShrimpyRestClient::get_user(self, user_id).await
    }

    async fn create_user(&self, name: Option<&str>) -> Result<CreatedUser, ShrimpyError> {
        ShrimpyRestClient::create_user(self, name).await
    }

    async fn rename_user(&self, user_id: &str, name: &str) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::rename_user(self, user_id, name).await
    }

    async fn enable_user(&self, user_id: &str) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::enable_user(self, user_id).await
    }

    async fn disable_user(&self, user_id: &str) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::disable_user(self, user_id).await
    }

    async fn get_api_keys(&self, user_id: &str) -> Result<Vec<String>, ShrimpyError> {
        ShrimpyRestClient::get_api_keys(self, user_id).await
    }

    async fn create_api_keys(&self, user_id: &str) -> Result<ApiKeyPair, ShrimpyError> {
        ShrimpyRestClient::create_api_keys(self, user_id).await
    }

    async fn delete_api_keys(&self, user_id: &str, public_key: &str) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::delete_api_keys(self, user_id, public_key).await
    }

    async fn get_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
    ) -> Result<ApiKeyPermissions, ShrimpyError> {
        ShrimpyRestClient::get_api_key_permissions(self, user_id, public_key).await
    }

    async fn set_api_key_permissions(
        &self,
        user_id: &str,
        public_key: &str,
        permissions: &ApiKeyPermissions,
    ) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::set_api_key_permissions(self, user_id, public_key, permissions).await
    }

    async fn list_accounts(&self, user_id: &str) -> Result<Vec<LinkedAccount>, ShrimpyError> {
        ShrimpyRestClient::list_accounts(self, user_id).await
    }

    async fn get_account(&self, user_id: &str, account_id: i64) -> Result<LinkedAccount, ShrimpyError> {
        ShrimpyRestClient::get_account(self, user_id, account_id).await
    }

    async fn link_account(
        &self,
        user_id: &str,
        request: &LinkAccountRequest,
    ) -> Result<LinkedAccountId, ShrimpyError> {
        ShrimpyRestClient::link_account(self, user_id, request).await
    }

    async fn unlink_account(&self, user_id: &str, account_id: i64) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::unlink_account(self, user_id, account_id).await
    }

    async fn get_ip_whitelist_addresses(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<String>, ShrimpyError> {
        ShrimpyRestClient::get_ip_whitelist_addresses(self, user_id, account_id).await
    }

    async fn create_trade(
        &self,
        user_id: &str,
        account_id: i64,
        request: &CreateTradeRequest,
    ) -> Result<TradeId, ShrimpyError> {
        ShrimpyRestClient::create_trade(self, user_id, account_id, request).await
    }

    async fn get_trade_status(
        &self,
        user_id: &str,
        account_id: i64,
        trade_id: &str,
    ) -> Result<TradeStatus, ShrimpyError> {
        ShrimpyRestClient::get_trade_status(self, user_id, account_id, trade_id).await
    }

    async fn list_active_trades(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<ActiveTrade>, ShrimpyError> {
        ShrimpyRestClient::list_active_trades(self, user_id, account_id).await
    }

    async fn get_balance(
        &self,
        user_id: &str,
        account_id: i64,
        date: Option<OffsetDateTime>,
    ) -> Result<AccountBalance, ShrimpyError> {
        ShrimpyRestClient::get_balance(self, user_id, account_id, date).await
    }

    async fn get_total_balance_history(
        &self,
        user_id: &str,
        account_id: i64,
        request: &BalanceHistoryRequest,
    ) -> Result<Vec<BalanceHistoryPoint>, ShrimpyError> {
        ShrimpyRestClient::get_total_balance_history(self, user_id, account_id, request).await
    }

    async fn create_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        request: &LimitOrderRequest,
    ) -> Result<OrderId, ShrimpyError> {
        ShrimpyRestClient::create_limit_order(self, user_id, account_id, request).await
    }

    async fn get_limit_order_status(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> Result<LimitOrderStatus, ShrimpyError> {
        ShrimpyRestClient::get_limit_order_status(self, user_id, account_id, order_id).await
    }

    async fn list_open_orders(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<LimitOrder>, ShrimpyError> {
        ShrimpyRestClient::list_open_orders(self, user_id, account_id).await
    }

    async fn cancel_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> Result<(), ShrimpyError> {
        ShrimpyRestClient::cancel_limit_order(self, user_id, account_id, order_id).await
    }
}

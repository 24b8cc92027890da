//! Trading, balance and limit order endpoints.
//!
//! Every call is scoped to one user and one of their linked exchange accounts.

mod types;

pub use types::*;

use time::OffsetDateTime;

use crate::error::ShrimpyError;
use crate::rest::ShrimpyRestClient;
use crate::rest::client::expect_success;
use crate::rest::endpoints::trading;
use crate::types::SuccessResponse;

impl ShrimpyRestClient {
    /// Submit a trade converting one asset into another.
    ///
    /// The trade runs asynchronously; poll it with
    /// [`get_trade_status`](Self::get_trade_status).
    pub async fn create_trade(
        &self,
        user_id: &str,
        account_id: i64,
        request: &CreateTradeRequest,
    ) -> Result<TradeId, ShrimpyError> {
        tracing::debug!(
            user_id,
            account_id,
            from = %request.from_symbol,
            to = %request.to_symbol,
            amount = %request.amount,
            "creating trade"
        );
        self.post(&trading::trades(user_id, account_id), request)
            .await
    }

    /// Get a trade with its balance changes and fills.
    pub async fn get_trade_status(
        &self,
        user_id: &str,
        account_id: i64,
        trade_id: &str,
    ) -> Result<TradeStatus, ShrimpyError> {
        self.get(&trading::trade(user_id, account_id, trade_id))
            .await
    }

    /// List the trades that have not completed yet.
    pub async fn list_active_trades(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<ActiveTrade>, ShrimpyError> {
        self.get(&trading::trades(user_id, account_id)).await
    }

    /// Get the balances of an account.
    ///
    /// With a `date`, returns the balance snapshot closest to that time instead
    /// of the current one.
    pub async fn get_balance(
        &self,
        user_id: &str,
        account_id: i64,
        date: Option<OffsetDateTime>,
    ) -> Result<AccountBalance, ShrimpyError> {
        self.get_with_params(&trading::balance(user_id, account_id), &BalanceQuery { date })
            .await
    }

    /// Get the account's total value over time.
    pub async fn get_total_balance_history(
        &self,
        user_id: &str,
        account_id: i64,
        request: &BalanceHistoryRequest,
    ) -> Result<Vec<BalanceHistoryPoint>, ShrimpyError> {
        self.get_with_params(&trading::total_balance_history(user_id, account_id), request)
            .await
    }

    /// Place a limit order.
    pub async fn create_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        request: &LimitOrderRequest,
    ) -> Result<OrderId, ShrimpyError> {
        tracing::debug!(
            user_id,
            account_id,
            side = %request.side,
            base = %request.base_symbol,
            quote = %request.quote_symbol,
            "placing limit order"
        );
        self.post(&trading::orders(user_id, account_id), request)
            .await
    }

    /// Get a limit order with its balance changes.
    pub async fn get_limit_order_status(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> Result<LimitOrderStatus, ShrimpyError> {
        self.get(&trading::order(user_id, account_id, order_id))
            .await
    }

    /// List the account's open limit orders.
    pub async fn list_open_orders(
        &self,
        user_id: &str,
        account_id: i64,
    ) -> Result<Vec<LimitOrder>, ShrimpyError> {
        self.get(&trading::orders(user_id, account_id)).await
    }

    /// Request cancellation of a limit order.
    ///
    /// Cancellation is asynchronous; the order's `cancel_requested` flag is set
    /// until the exchange confirms.
    pub async fn cancel_limit_order(
        &self,
        user_id: &str,
        account_id: i64,
        order_id: &str,
    ) -> Result<(), ShrimpyError> {
        let response: SuccessResponse = self
            .delete(&trading::order(user_id, account_id, order_id))
            .await?;
        expect_success(response, "cancel limit order")
    }
}

//! Types for trading, balance and limit order endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::error::ApiError;
use crate::types::common::record_failure;
use crate::types::serde_helpers::{decimal_string_or_number, optional_decimal};
use crate::types::{ExchangeApiError, OrderSide, TimeInForce};

// Trades

/// Request to convert one asset into another.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradeRequest {
    /// Symbol to sell.
    pub from_symbol: String,
    /// Symbol to buy.
    pub to_symbol: String,
    /// Amount of `from_symbol` to sell.
    pub amount: Decimal,
    /// Route through intermediate assets for better prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_routing: Option<bool>,
    /// Abort if the spread exceeds this percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_spread_percent: Option<Decimal>,
    /// Abort if slippage exceeds this percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_slippage_percent: Option<Decimal>,
}

impl CreateTradeRequest {
    /// Create a trade request with default routing and no guards.
    pub fn new(from_symbol: impl Into<String>, to_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_symbol: from_symbol.into(),
            to_symbol: to_symbol.into(),
            amount,
            smart_routing: None,
            max_spread_percent: None,
            max_slippage_percent: None,
        }
    }

    /// Enable smart routing.
    pub fn smart_routing(mut self) -> Self {
        self.smart_routing = Some(true);
        self
    }

    /// Set the maximum spread, in percent.
    pub fn max_spread_percent(mut self, percent: Decimal) -> Self {
        self.max_spread_percent = Some(percent);
        self
    }

    /// Set the maximum slippage, in percent.
    pub fn max_slippage_percent(mut self, percent: Decimal) -> Self {
        self.max_slippage_percent = Some(percent);
        self
    }
}

/// Id of a submitted trade.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TradeId {
    /// Trade id.
    pub id: String,
}

/// A trade and its progress.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Trade id.
    pub id: String,
    /// Symbol sold.
    pub from_symbol: String,
    /// Symbol bought.
    pub to_symbol: String,
    /// Amount of `from_symbol` sold.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub amount: Decimal,
    /// Trade status (e.g., "queued", "started", "completed").
    pub status: String,
    /// Whether the trade succeeded. Only meaningful once completed.
    #[serde(default)]
    pub success: bool,
    /// Non-zero when the trade failed.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error_code: i64,
    /// Failure description.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error_message: String,
    /// Errors reported by the exchange while trading.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub exchange_api_errors: Vec<ExchangeApiError>,
    /// Whether smart routing was used.
    #[serde(default)]
    pub smart_routing: bool,
    /// Spread guard, in percent.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max_spread_percent: Option<Decimal>,
    /// Slippage guard, in percent.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub max_slippage_percent: Option<Decimal>,
    /// Whether the spread guard stopped the trade.
    #[serde(default)]
    pub triggered_max_spread: bool,
    /// Whether the slippage guard stopped the trade.
    #[serde(default)]
    pub triggered_max_slippage: bool,
}

impl Trade {
    /// Whether the trade has finished, successfully or not.
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case("completed")
    }

    /// The failure the trade reported, if any.
    pub fn failure(&self) -> Option<ApiError> {
        record_failure(self.success, self.error_code, &self.error_message)
    }
}

/// A trade that has not completed yet, as returned by the active trades list.
pub type ActiveTrade = Trade;

/// A trade with the balance changes and fills it produced.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeStatus {
    /// The trade.
    pub trade: Trade,
    /// Net balance changes.
    #[serde(default)]
    pub changes: Vec<BalanceChange>,
    /// Individual fills.
    #[serde(default)]
    pub fills: Vec<Fill>,
}

/// Net change to one asset's balance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    /// Asset symbol.
    pub symbol: String,
    /// Change in the asset's own units.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub native_value: Decimal,
    /// Change in BTC.
    pub btc_value: f64,
    /// Change in USD.
    pub usd_value: f64,
}

/// A single fill on the exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Base asset amount.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub base_amount: Decimal,
    /// Base asset symbol.
    pub base_symbol: String,
    /// Fill value in BTC.
    pub btc_value: f64,
    /// Fill price.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub price: Decimal,
    /// Quote asset amount.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub quote_amount: Decimal,
    /// Quote asset symbol.
    pub quote_symbol: String,
    /// Fill side.
    pub side: OrderSide,
    /// Fill value in USD.
    pub usd_value: f64,
}

// Balances

/// Query for the balance endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct BalanceQuery {
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub date: Option<OffsetDateTime>,
}

/// Balances of a linked account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// When Shrimpy fetched the balances from the exchange.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub retrieved_at: Option<OffsetDateTime>,
    /// Per-asset balances.
    #[serde(default)]
    pub balances: Vec<AssetBalance>,
}

impl AccountBalance {
    /// Balance of one asset, if held.
    pub fn get(&self, symbol: &str) -> Option<&AssetBalance> {
        self.balances.iter().find(|b| b.symbol == symbol)
    }

    /// Total value of the account in USD.
    pub fn total_usd_value(&self) -> f64 {
        self.balances.iter().map(|b| b.usd_value).sum()
    }
}

/// Balance of a single asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Asset symbol.
    pub symbol: String,
    /// Amount held, in the asset's own units.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub native_value: Decimal,
    /// Value in BTC.
    pub btc_value: f64,
    /// Value in USD.
    pub usd_value: f64,
}

/// Query for the total balance history endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistoryRequest {
    /// Earliest point to return.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub start_time: Option<OffsetDateTime>,
    /// Latest point to return.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub end_time: Option<OffsetDateTime>,
}

impl BalanceHistoryRequest {
    /// Request history between two points in time.
    pub fn between(start_time: OffsetDateTime, end_time: OffsetDateTime) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }
}

/// Aggregate account value at a point in time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistoryPoint {
    /// Sample time.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Value in USD.
    pub usd_value: f64,
    /// Value in BTC.
    pub btc_value: f64,
}

// Limit orders

/// Request to place a limit order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    /// Base asset symbol.
    pub base_symbol: String,
    /// Quote asset symbol.
    pub quote_symbol: String,
    /// Amount of the base asset.
    pub quantity: Decimal,
    /// Limit price in the quote asset.
    pub price: Decimal,
    /// Order side.
    pub side: OrderSide,
    /// Time in force.
    pub time_in_force: TimeInForce,
}

impl LimitOrderRequest {
    /// Create a good-till-cancelled buy order.
    pub fn buy(
        base_symbol: impl Into<String>,
        quote_symbol: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            base_symbol: base_symbol.into(),
            quote_symbol: quote_symbol.into(),
            quantity,
            price,
            side: OrderSide::Buy,
            time_in_force: TimeInForce::Gtc,
        }
    }

    /// Create a good-till-cancelled sell order.
    pub fn sell(
        base_symbol: impl Into<String>,
        quote_symbol: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            side: OrderSide::Sell,
            ..Self::buy(base_symbol, quote_symbol, quantity, price)
        }
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }
}

/// Id of a placed limit order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderId {
    /// Order id.
    pub id: String,
}

/// A limit order.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    /// Order id.
    pub id: String,
    /// Base asset symbol.
    pub base_symbol: String,
    /// Quote asset symbol.
    pub quote_symbol: String,
    /// Order quantity.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub amount: Decimal,
    /// Limit price.
    #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
    pub price: Decimal,
    /// Order side.
    pub side: OrderSide,
    /// Time in force.
    pub time_in_force: TimeInForce,
    /// Order status (e.g., "open", "completed").
    pub status: String,
    /// Whether a cancel was requested.
    #[serde(default)]
    pub cancel_requested: bool,
    /// Whether the order succeeded.
    #[serde(default)]
    pub success: bool,
    /// Non-zero when the order failed.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error_code: i64,
    /// Failure description.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error_message: String,
    /// Errors reported by the exchange.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub exchange_api_errors: Vec<ExchangeApiError>,
}

impl LimitOrder {
    /// Whether the order is still on the book.
    pub fn is_open(&self) -> bool {
        !self.status.eq_ignore_ascii_case("completed")
    }

    /// The failure the order reported, if any.
    pub fn failure(&self) -> Option<ApiError> {
        record_failure(self.success, self.error_code, &self.error_message)
    }
}

/// A limit order with the balance changes it produced.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitOrderStatus {
    /// The order.
    pub order: LimitOrder,
    /// Net balance changes.
    #[serde(default)]
    pub changes: Vec<BalanceChange>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use time::macros::datetime;

    #[test]
    fn test_create_trade_body_omits_unset_options() {
        let request = CreateTradeRequest::new("BTC", "ETH", Decimal::from_str("0.01").unwrap());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"fromSymbol":"BTC","toSymbol":"ETH","amount":"0.01"}"#
        );

        let request = request
            .smart_routing()
            .max_spread_percent(Decimal::from_str("1.5").unwrap());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"fromSymbol":"BTC","toSymbol":"ETH","amount":"0.01","smartRouting":true,"maxSpreadPercent":"1.5"}"#
        );
    }

    #[test]
    fn test_trade_status_deserialize() {
        let json = r#"{
            "trade": {
                "id": "72dff099-54c0-4a32-b046-5c19d4f55758",
                "fromSymbol": "BTC",
                "toSymbol": "ETH",
                "amount": "0.01",
                "status": "completed",
                "success": false,
                "errorCode": 2001,
                "errorMessage": "Insufficient funds",
                "exchangeApiErrors": [],
                "smartRouting": false,
                "maxSpreadPercent": "10",
                "maxSlippagePercent": "10",
                "triggeredMaxSpread": false,
                "triggeredMaxSlippage": false
            },
            "changes": [
                {"symbol": "BTC", "nativeValue": "-0.01", "btcValue": -0.01, "usdValue": -37.5}
            ],
            "fills": []
        }"#;
        let status: TradeStatus = serde_json::from_str(json).unwrap();

        assert!(status.trade.is_completed());
        let failure = status.trade.failure().unwrap();
        assert_eq!(failure.code, Some(2001));
        assert_eq!(status.changes[0].native_value, Decimal::from_str("-0.01").unwrap());
        assert!(status.fills.is_empty());
    }

    #[test]
    fn test_active_trade_numeric_amount_and_nulls() {
        let json = r#"[{
            "id": "t-1",
            "fromSymbol": "XLM",
            "toSymbol": "BTC",
            "amount": 100.5,
            "status": "queued",
            "success": false,
            "errorCode": null,
            "errorMessage": null,
            "exchangeApiErrors": null,
            "smartRouting": true,
            "maxSpreadPercent": null,
            "maxSlippagePercent": "",
            "triggeredMaxSpread": false,
            "triggeredMaxSlippage": false
        }]"#;
        let trades: Vec<Trade> = serde_json::from_str(json).unwrap();

        assert_eq!(trades[0].amount, Decimal::from_str("100.5").unwrap());
        assert_eq!(trades[0].error_code, 0);
        assert!(trades[0].max_spread_percent.is_none());
        assert!(trades[0].max_slippage_percent.is_none());
        assert!(trades[0].failure().is_none());
        assert!(!trades[0].is_completed());
    }

    #[test]
    fn test_limit_order_request_body() {
        let request = LimitOrderRequest::sell(
            "XLM",
            "BTC",
            Decimal::from_str("12").unwrap(),
            Decimal::from_str("0.00002").unwrap(),
        )
        .time_in_force(TimeInForce::Ioc);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"baseSymbol":"XLM","quoteSymbol":"BTC","quantity":"12","price":"0.00002","side":"SELL","timeInForce":"IOC"}"#
        );
    }

    #[test]
    fn test_limit_order_status_deserialize() {
        let json = r#"{
            "order": {
                "id": "o-1",
                "baseSymbol": "XLM",
                "quoteSymbol": "BTC",
                "amount": "12",
                "price": "0.00002",
                "side": "BUY",
                "timeInForce": "GTC",
                "status": "open",
                "cancelRequested": false,
                "success": false,
                "errorCode": 0,
                "errorMessage": "",
                "exchangeApiErrors": []
            },
            "changes": []
        }"#;
        let status: LimitOrderStatus = serde_json::from_str(json).unwrap();
        assert!(status.order.is_open());
        assert_eq!(status.order.side, OrderSide::Buy);
        assert!(status.order.failure().is_none());
    }

    #[test]
    fn test_balance_queries() {
        let query = BalanceQuery {
            date: Some(datetime!(2019-01-01 00:00 UTC)),
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "date=2019-01-01T00%3A00%3A00Z"
        );
        assert_eq!(
            serde_urlencoded::to_string(BalanceQuery::default()).unwrap(),
            ""
        );

        let request = BalanceHistoryRequest {
            end_time: Some(datetime!(2019-02-01 12:30 UTC)),
            ..BalanceHistoryRequest::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "endTime=2019-02-01T12%3A30%3A00Z"
        );
    }

    #[test]
    fn test_account_balance_helpers() {
        let json = r#"{
            "retrievedAt": "2019-01-09T19:17:33.000Z",
            "balances": [
                {"symbol": "KCS", "nativeValue": 2306, "btcValue": 0.33486579, "usdValue": 1327.8775274784},
                {"symbol": "ETH", "nativeValue": 4.0e-8, "btcValue": 1.4e-9, "usdValue": 0.00000555}
            ]
        }"#;
        let balance: AccountBalance = serde_json::from_str(json).unwrap();

        assert!(balance.retrieved_at.is_some());
        assert_eq!(balance.get("KCS").unwrap().native_value, Decimal::from(2306));
        assert!(balance.get("BTC").is_none());
        assert!(balance.total_usd_value() > 1327.0);
    }
}

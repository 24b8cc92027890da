//! Types for market data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::CandleInterval;
use crate::types::serde_helpers::{comma_separated, empty_string_as_none, optional_decimal};

/// Default number of levels per side returned by the order book endpoint.
pub const DEFAULT_ORDER_BOOK_LIMIT: u32 = 10;

/// An exchange supported by Shrimpy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedExchange {
    /// Exchange identifier (e.g., "binance").
    pub exchange: String,
    /// Lowest trading fee on the exchange.
    pub best_case_fee: f64,
    /// Highest trading fee on the exchange.
    pub worst_case_fee: f64,
    /// URL of the exchange icon.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub icon: Option<String>,
}

/// An asset listed on an exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeAsset {
    /// Shrimpy asset id.
    pub id: i64,
    /// Asset name.
    pub name: String,
    /// Normalized symbol.
    pub symbol: String,
    /// Symbol as used by the exchange for trading.
    pub trading_symbol: String,
}

/// A tradable pair on an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    /// Base asset trading symbol.
    pub base_trading_symbol: String,
    /// Quote asset trading symbol.
    pub quote_trading_symbol: String,
}

/// Ticker for one asset on an exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Asset name.
    pub name: String,
    /// Asset symbol.
    pub symbol: String,
    /// Price in USD.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub price_usd: Option<Decimal>,
    /// Price in BTC.
    #[serde(default, deserialize_with = "optional_decimal::deserialize")]
    pub price_btc: Option<Decimal>,
    /// 24h change in USD terms, in percent.
    #[serde(
        rename = "percentChange24hUsd",
        default,
        deserialize_with = "optional_decimal::deserialize"
    )]
    pub percent_change_24h_usd: Option<Decimal>,
    /// When the ticker was last refreshed.
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

/// Request parameters for the order book endpoint.
///
/// With every filter unset the query is `exchange=all&limit=10`.
#[derive(Debug, Clone, Default)]
pub struct OrderBooksRequest {
    /// Exchanges to query. Empty means all exchanges.
    pub exchanges: Vec<String>,
    /// Levels per side. Defaults to 10.
    pub limit: Option<u32>,
    /// Quote symbol filter.
    pub quote_symbol: Option<String>,
    /// Base symbol filter.
    pub base_symbol: Option<String>,
}

impl OrderBooksRequest {
    /// Create a request for all exchanges with default depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the query to the given exchanges.
    pub fn exchanges<I, S>(mut self, exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    /// Set the depth per side.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by trading pair.
    pub fn pair(mut self, base_symbol: impl Into<String>, quote_symbol: impl Into<String>) -> Self {
        self.base_symbol = Some(base_symbol.into());
        self.quote_symbol = Some(quote_symbol.into());
        self
    }

    pub(crate) fn to_query(&self) -> OrderBooksQuery<'_> {
        let exchange = if self.exchanges.is_empty() {
            vec!["all"]
        } else {
            self.exchanges.iter().map(String::as_str).collect()
        };

        OrderBooksQuery {
            exchange,
            limit: self.limit.unwrap_or(DEFAULT_ORDER_BOOK_LIMIT),
            quote_symbol: self.quote_symbol.as_deref().filter(|s| !s.is_empty()),
            base_symbol: self.base_symbol.as_deref().filter(|s| !s.is_empty()),
        }
    }
}

/// Wire form of [`OrderBooksRequest`]. Field order is the query order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderBooksQuery<'a> {
    #[serde(serialize_with = "comma_separated::serialize")]
    exchange: Vec<&'a str>,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote_symbol: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_symbol: Option<&'a str>,
}

/// Order books for one trading pair across exchanges.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderBooks {
    /// Quote symbol.
    pub quote_symbol: String,
    /// Base symbol.
    pub base_symbol: String,
    /// One book per exchange.
    #[serde(default)]
    pub order_books: Vec<ExchangeOrderBook>,
}

/// An order book on a single exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOrderBook {
    /// Exchange identifier.
    pub exchange: String,
    /// The book itself.
    pub order_book: OrderBook,
}

/// Bids and asks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    /// Ask levels, best first.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Bid levels, best first.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
}

impl OrderBook {
    /// Best ask level, if any.
    pub fn best_ask(&self) -> Option<&OrderBookLevel> {
        self.asks.first()
    }

    /// Best bid level, if any.
    pub fn best_bid(&self) -> Option<&OrderBookLevel> {
        self.bids.first()
    }
}

/// A single price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderBookLevel {
    /// Price.
    pub price: Decimal,
    /// Quantity available at the price.
    pub quantity: Decimal,
}

/// Request parameters for the candles endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesRequest {
    /// Quote asset trading symbol.
    pub quote_trading_symbol: String,
    /// Base asset trading symbol.
    pub base_trading_symbol: String,
    /// Candle interval.
    pub interval: CandleInterval,
    /// Only return candles starting at or after this time.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub start_time: Option<OffsetDateTime>,
}

impl CandlesRequest {
    /// Create a new candles request.
    pub fn new(
        base_trading_symbol: impl Into<String>,
        quote_trading_symbol: impl Into<String>,
        interval: CandleInterval,
    ) -> Self {
        Self {
            quote_trading_symbol: quote_trading_symbol.into(),
            base_trading_symbol: base_trading_symbol.into(),
            interval,
            start_time: None,
        }
    }

    /// Only return candles from this time on.
    pub fn start_time(mut self, start_time: OffsetDateTime) -> Self {
        self.start_time = Some(start_time);
        self
    }
}

/// A candlestick.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Opening price.
    pub open: Decimal,
    /// Highest price.
    pub high: Decimal,
    /// Lowest price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Volume in the base asset.
    pub volume: Decimal,
    /// Volume in the quote asset.
    pub quote_volume: f64,
    /// Volume in BTC.
    pub btc_volume: f64,
    /// Volume in USD.
    pub usd_volume: f64,
    /// Candle open time.
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
}

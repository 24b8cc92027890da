//! Market data endpoints.

mod types;

pub use types::*;

use crate::error::ShrimpyError;
use crate::rest::ShrimpyRestClient;
use crate::rest::endpoints::market;

impl ShrimpyRestClient {
    /// Get the exchanges Shrimpy supports.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use shrimpy_api_client::auth::StaticCredentials;
    /// use shrimpy_api_client::rest::ShrimpyRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ShrimpyRestClient::builder()
    ///         .credentials(Arc::new(StaticCredentials::new("key", "c2VjcmV0")))
    ///         .build();
    ///     for exchange in client.get_supported_exchanges().await? {
    ///         println!("{} ({} - {})", exchange.exchange, exchange.best_case_fee, exchange.worst_case_fee);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_supported_exchanges(&self) -> Result<Vec<SupportedExchange>, ShrimpyError> {
        self.get(market::LIST_EXCHANGES).await
    }

    /// Get the assets listed on an exchange.
    pub async fn get_exchange_assets(
        &self,
        exchange: &str,
    ) -> Result<Vec<ExchangeAsset>, ShrimpyError> {
        self.get(&market::assets(exchange)).await
    }

    /// Get the trading pairs listed on an exchange.
    pub async fn get_trading_pairs(&self, exchange: &str) -> Result<Vec<TradingPair>, ShrimpyError> {
        self.get(&market::trading_pairs(exchange)).await
    }

    /// Get tickers for every asset on an exchange.
    pub async fn get_ticker(&self, exchange: &str) -> Result<Vec<Ticker>, ShrimpyError> {
        self.get(&market::ticker(exchange)).await
    }

    /// Get order books.
    ///
    /// # Arguments
    ///
    /// * `request` - Exchange, depth and pair filters. Unset filters are not
    ///   sent; an empty exchange list queries every exchange.
    pub async fn get_order_books(
        &self,
        request: &OrderBooksRequest,
    ) -> Result<Vec<MarketOrderBooks>, ShrimpyError> {
        self.get_with_params(market::ORDER_BOOKS, &request.to_query())
            .await
    }

    /// Get candlesticks for a pair on an exchange.
    pub async fn get_candles(
        &self,
        exchange: &str,
        request: &CandlesRequest,
    ) -> Result<Vec<Candle>, ShrimpyError> {
        self.get_with_params(&market::candles(exchange), request).await
    }
}

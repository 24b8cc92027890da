//! Example: Fetching market data from Shrimpy.
//!
//! Every Shrimpy endpoint is signed, so this needs the master key pair in
//! `SHRIMPY_API_KEY` and `SHRIMPY_API_SECRET` (a `.env` file works too).
//!
//! Run with: cargo run --example market_data

use std::sync::Arc;

use shrimpy_api_client::CandleInterval;
use shrimpy_api_client::auth::EnvCredentials;
use shrimpy_api_client::rest::ShrimpyRestClient;
use shrimpy_api_client::rest::market::{CandlesRequest, OrderBooksRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Set SHRIMPY_API_KEY and SHRIMPY_API_SECRET to run this example.");
        return Ok(());
    };
    let client = ShrimpyRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Supported Exchanges ===");
    let exchanges = client.get_supported_exchanges().await?;
    for exchange in &exchanges {
        println!(
            "{}: fees {} - {}",
            exchange.exchange, exchange.best_case_fee, exchange.worst_case_fee
        );
    }

    println!("\n=== Ticker (binance, first 5) ===");
    let tickers = client.get_ticker("binance").await?;
    for ticker in tickers.iter().take(5) {
        let usd = ticker
            .price_usd
            .map(|p| p.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        println!("{} ({}): ${}", ticker.name, ticker.symbol, usd);
    }

    println!("\n=== Order Books (XLM/BTC) ===");
    let request = OrderBooksRequest::new()
        .exchanges(["bittrex", "binance"])
        .limit(3)
        .pair("XLM", "BTC");
    for market in client.get_order_books(&request).await? {
        for book in &market.order_books {
            let ask = book.order_book.best_ask().map(|l| l.price);
            let bid = book.order_book.best_bid().map(|l| l.price);
            println!("{}: ask {:?} bid {:?}", book.exchange, ask, bid);
        }
    }

    println!("\n=== Candles (binance XLM/BTC, 1d) ===");
    let request = CandlesRequest::new("XLM", "BTC", CandleInterval::Day1);
    let candles = client.get_candles("binance", &request).await?;
    for candle in candles.iter().rev().take(3) {
        println!(
            "{}: O={} H={} L={} C={}",
            candle.time, candle.open, candle.high, candle.low, candle.close
        );
    }

    Ok(())
}

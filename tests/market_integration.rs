use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rust_decimal::Decimal;
use time::macros::datetime;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shrimpy_api_client::CandleInterval;
use shrimpy_api_client::auth::StaticCredentials;
use shrimpy_api_client::rest::market::{CandlesRequest, OrderBooksRequest};
use shrimpy_api_client::rest::{ShrimpyClient, ShrimpyRestClient};

fn build_client(server: &MockServer) -> ShrimpyRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", STANDARD.encode("test_secret")));
    ShrimpyRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

#[tokio::test]
async fn test_get_supported_exchanges() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "exchange": "bittrex",
            "bestCaseFee": 0.0025,
            "worstCaseFee": 0.0025,
            "icon": "https://assets.shrimpy.io/exchanges/bittrex.png"
        },
        {
            "exchange": "binance",
            "bestCaseFee": 0.001,
            "worstCaseFee": 0.001,
            "icon": "https://assets.shrimpy.io/exchanges/binance.png"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/list_exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let exchanges = client.get_supported_exchanges().await.unwrap();

    assert_eq!(exchanges.len(), 2);
    assert_eq!(exchanges[1].exchange, "binance");
    assert_eq!(exchanges[0].best_case_fee, 0.0025);
}

#[tokio::test]
async fn test_get_exchange_assets_and_pairs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchanges/kucoin/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 3, "name": "Bitcoin", "symbol": "BTC", "tradingSymbol": "BTC" },
            { "id": 1448, "name": "Stellar", "symbol": "XLM", "tradingSymbol": "XLM" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/exchanges/kucoin/trading_pairs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "baseTradingSymbol": "XLM", "quoteTradingSymbol": "BTC" }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let assets = client.get_exchange_assets("kucoin").await.unwrap();
    assert_eq!(assets[1].symbol, "XLM");
    assert_eq!(assets[1].id, 1448);

    let pairs = client.get_trading_pairs("kucoin").await.unwrap();
    assert_eq!(pairs[0].base_trading_symbol, "XLM");
    assert_eq!(pairs[0].quote_trading_symbol, "BTC");
}

#[tokio::test]
async fn test_get_ticker_with_missing_prices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchanges/bittrex/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "name": "Bitcoin",
                "symbol": "BTC",
                "priceUsd": "3700.0089335",
                "priceBtc": "1",
                "percentChange24hUsd": "-0.82",
                "lastUpdated": "2018-12-19T22:51:13.000Z"
            },
            {
                "name": "Delisted",
                "symbol": "DLST",
                "priceUsd": "",
                "priceBtc": null,
                "percentChange24hUsd": "",
                "lastUpdated": "2018-12-19T22:51:13.000Z"
            }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let tickers = client.get_ticker("bittrex").await.unwrap();

    assert_eq!(tickers[0].price_usd, Some("3700.0089335".parse::<Decimal>().unwrap()));
    assert_eq!(tickers[0].last_updated, datetime!(2018-12-19 22:51:13 UTC));
    assert!(tickers[1].price_usd.is_none());
    assert!(tickers[1].price_btc.is_none());
}

#[tokio::test]
async fn test_get_order_books_default_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orderbooks"))
        .and(query_param("exchange", "all"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("baseSymbol"))
        .and(query_param_is_missing("quoteSymbol"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let books = client.get_order_books(&OrderBooksRequest::new()).await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_get_order_books_filtered() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "baseSymbol": "XLM",
        "quoteSymbol": "BTC",
        "orderBooks": [{
            "exchange": "bittrex",
            "orderBook": {
                "asks": [
                    { "price": "0.00002585", "quantity": "1834.9188" },
                    { "price": "0.0000259", "quantity": "100" }
                ],
                "bids": [
                    { "price": "0.00002582", "quantity": "3262.1363" }
                ]
            }
        }]
    }]);

    Mock::given(method("GET"))
        .and(path("/v1/orderbooks"))
        .and(query_param("exchange", "bittrex,binance"))
        .and(query_param("limit", "5"))
        .and(query_param("baseSymbol", "XLM"))
        .and(query_param("quoteSymbol", "BTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OrderBooksRequest::new()
        .exchanges(["bittrex", "binance"])
        .limit(5)
        .pair("XLM", "BTC");
    let books = client.get_order_books(&request).await.unwrap();

    let book = &books[0].order_books[0].order_book;
    assert_eq!(books[0].order_books[0].exchange, "bittrex");
    assert_eq!(book.asks.len(), 2);
    assert_eq!(
        book.best_ask().unwrap().price,
        "0.00002585".parse::<Decimal>().unwrap()
    );
    assert_eq!(
        book.best_bid().unwrap().quantity,
        "3262.1363".parse::<Decimal>().unwrap()
    );
}

#[tokio::test]
async fn test_get_candles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchanges/binance/candles"))
        .and(query_param("quoteTradingSymbol", "BTC"))
        .and(query_param("baseTradingSymbol", "XLM"))
        .and(query_param("interval", "1h"))
        .and(query_param("startTime", "2019-05-19T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "open": "0.0000133",
            "high": "0.0000135",
            "low": "0.0000131",
            "close": "0.0000134",
            "volume": "336614.0",
            "quoteVolume": 4.48,
            "btcVolume": 4.48,
            "usdVolume": 35600.12,
            "time": "2019-05-19T00:00:00.000Z"
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CandlesRequest::new("XLM", "BTC", CandleInterval::Hour1)
        .start_time(datetime!(2019-05-19 00:00 UTC));
    let candles = client.get_candles("binance", &request).await.unwrap();

    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].close, "0.0000134".parse::<Decimal>().unwrap());
    assert_eq!(candles[0].time, datetime!(2019-05-19 00:00 UTC));
}

async fn count_exchanges<C: ShrimpyClient>(client: &C) -> usize {
    client.get_supported_exchanges().await.map(|e| e.len()).unwrap_or(0)
}

#[tokio::test]
async fn test_generic_client_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/list_exchanges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "exchange": "kraken", "bestCaseFee": 0.0016, "worstCaseFee": 0.0026, "icon": "" }
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(count_exchanges(&client).await, 1);
}

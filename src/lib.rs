//! # Shrimpy Client
//!
//! An async Rust client library for the Shrimpy exchange aggregation REST API.
//!
//! ## Features
//!
//! - Market data across every exchange Shrimpy supports
//! - User, API key and linked exchange account management
//! - Trades, balances and limit orders on linked accounts
//! - HMAC-SHA256 request signing with strictly increasing nonces
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shrimpy_api_client::ClientConfig;
//! use shrimpy_api_client::rest::ShrimpyRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("master_api_key", "bWFzdGVyX3NlY3JldA==");
//!     let client = ShrimpyRestClient::from_config(config)?;
//!     let exchanges = client.get_supported_exchanges().await?;
//!     println!("{} exchanges supported", exchanges.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{ApiError, ShrimpyError};
pub use types::common::{CandleInterval, OrderSide, TimeInForce};

/// Result type alias using ShrimpyError
pub type Result<T> = std::result::Result<T, ShrimpyError>;

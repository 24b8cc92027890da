//! Common domain types for the Shrimpy API.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Buy or sell side of a limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy the base asset
    #[serde(alias = "buy")]
    Buy,
    /// Sell the base asset
    #[serde(alias = "sell")]
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// How long a limit order stays on the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
        }
    }
}

/// Candlestick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    /// 1 minute
    #[serde(rename = "1m")]
    Minute1,
    /// 5 minutes
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minutes
    #[serde(rename = "15m")]
    Minute15,
    /// 1 hour
    #[serde(rename = "1h")]
    Hour1,
    /// 6 hours
    #[serde(rename = "6h")]
    Hour6,
    /// 1 day
    #[serde(rename = "1d")]
    Day1,
}

impl std::fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CandleInterval::Minute1 => "1m",
            CandleInterval::Minute5 => "5m",
            CandleInterval::Minute15 => "15m",
            CandleInterval::Hour1 => "1h",
            CandleInterval::Hour6 => "6h",
            CandleInterval::Day1 => "1d",
        };
        write!(f, "{}", s)
    }
}

/// An error the underlying exchange returned while Shrimpy executed a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeApiError {
    /// Exchange-specific error code
    #[serde(default)]
    pub code: Option<i64>,
    /// Error message
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "success": bool }` response returned by mutation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SuccessResponse {
    /// Whether the operation was applied.
    pub success: bool,
}

impl SuccessResponse {
    /// Convert a `success: false` payload into an API error.
    pub fn into_result(self, operation: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::new(format!("{operation} was not successful")))
        }
    }
}

/// Failure details shared by trade and limit order records.
pub(crate) fn record_failure(
    success: bool,
    error_code: i64,
    error_message: &str,
) -> Option<ApiError> {
    if success && error_code == 0 {
        return None;
    }
    if error_code == 0 && error_message.is_empty() {
        // Still in flight: success is only set once the record completes.
        return None;
    }
    let mut error = ApiError::new(if error_message.is_empty() {
        "request failed".to_string()
    } else {
        error_message.to_string()
    });
    if error_code != 0 {
        error = error.with_code(error_code);
    }
    Some(error)
}

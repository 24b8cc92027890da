//! Custom serde helpers for Shrimpy's serialization formats.
//!
//! Shrimpy sends monetary values as decimal strings that are sometimes empty or
//! null, and takes exchange lists as a single comma-separated query value.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize a list as a comma-separated string.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shrimpy_api_client::types::serde_helpers::comma_separated;
///
/// #[derive(Serialize)]
/// struct Query {
///     #[serde(serialize_with = "comma_separated::serialize")]
///     exchange: Vec<String>,
/// }
///
/// let query = Query {
///     exchange: vec!["binance".to_string(), "kucoin".to_string()],
/// };
/// assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"exchange":"binance,kucoin"}"#);
/// ```
pub mod comma_separated {
    use super::*;

    /// Serialize a slice as a comma-separated string.
    pub fn serialize<T, S>(values: &[T], serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        let s = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&s)
    }
}

/// Deserialize an optional decimal string, treating `""` and `null` as `None`.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
/// use shrimpy_api_client::types::serde_helpers::optional_decimal;
///
/// #[derive(Deserialize)]
/// struct Ticker {
///     #[serde(deserialize_with = "optional_decimal::deserialize", default)]
///     price_usd: Option<Decimal>,
/// }
///
/// let ticker: Ticker = serde_json::from_str(r#"{"price_usd":""}"#).unwrap();
/// assert!(ticker.price_usd.is_none());
///
/// let ticker: Ticker = serde_json::from_str(r#"{"price_usd":"3.5"}"#).unwrap();
/// assert_eq!(ticker.price_usd.unwrap().to_string(), "3.5");
/// ```
pub mod optional_decimal {
    use super::*;
    use rust_decimal::Decimal;

    /// Deserialize a decimal string that may be empty or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

/// Deserialize a decimal sent either as a JSON string or as a JSON number.
///
/// Shrimpy is not consistent about quoting amounts: the same field is a string
/// in one endpoint and a number in another.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
/// use shrimpy_api_client::types::serde_helpers::decimal_string_or_number;
///
/// #[derive(Deserialize)]
/// struct Trade {
///     #[serde(deserialize_with = "decimal_string_or_number::deserialize")]
///     amount: Decimal,
/// }
///
/// let a: Trade = serde_json::from_str(r#"{"amount":"0.01"}"#).unwrap();
/// let b: Trade = serde_json::from_str(r#"{"amount":0.01}"#).unwrap();
/// assert_eq!(a.amount, b.amount);
/// ```
pub mod decimal_string_or_number {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::str::FromStr;

    /// Deserialize a decimal from a string or number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected a decimal string or number, got {other}"
                )));
            }
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(de::Error::custom)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use shrimpy_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     icon: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"icon":""}"#).unwrap();
/// assert!(response.icon.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

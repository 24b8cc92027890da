//! Common types used across the Shrimpy client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;

//! Shrimpy REST API client.
//!
//! Endpoints are grouped by area; each group adds its methods to
//! [`ShrimpyRestClient`] and exports the request and response types it uses.
//!
//! # Trait-based API
//!
//! The [`ShrimpyClient`] trait abstracts every REST operation, so code can be
//! written against a mock in tests.

mod client;
mod endpoints;
mod traits;

pub mod accounts;
pub mod market;
pub mod trading;
pub mod users;

pub use client::{ShrimpyRestClient, ShrimpyRestClientBuilder};
pub use endpoints::{API_KEY_HEADER, API_NONCE_HEADER, API_SIGNATURE_HEADER, SHRIMPY_BASE_URL};
pub use traits::ShrimpyClient;

//! Example: Request signing without touching the network.
//!
//! Run with: cargo run --example signing

use shrimpy_api_client::auth::{
    Credentials, IncreasingNonce, NonceProvider, prehash, sign_request,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The secret is the base64 string Shrimpy hands out.
    let credentials = Credentials::new("api_key", "dGVzdF9zZWNyZXQ=");

    let nonce = IncreasingNonce::new();
    let first = nonce.next_nonce();
    let second = nonce.next_nonce();
    println!("Nonces: {} then {}", first, second);

    let path = "/v1/users/701e0d16-1e9e-42c9-b6a1-4cada1f395b8/accounts/123/trades";
    let body = r#"{"fromSymbol":"BTC","toSymbol":"ETH","amount":"0.01"}"#;

    println!("Pre-hash: {}", prehash(path, "POST", 12345, body));
    println!(
        "Signature: {}",
        sign_request(&credentials, path, "POST", 12345, body)?
    );

    // An empty object body signs the same as no body.
    let with_empty = sign_request(&credentials, "/v1/list_exchanges", "GET", 1, "{}")?;
    let without = sign_request(&credentials, "/v1/list_exchanges", "GET", 1, "")?;
    assert_eq!(with_empty, without);
    println!("GET /v1/list_exchanges @1: {}", without);

    Ok(())
}

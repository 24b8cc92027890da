//! Nonce generation for Shrimpy API authentication.
//!
//! Shrimpy rejects any signed request whose nonce is not greater than the last
//! one it accepted for the same key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A counter seeded from the wall clock that advances by exactly one per request.
///
/// The seed is taken once, at construction, in nanoseconds since the UNIX
/// epoch. Each call to [`next_nonce`](NonceProvider::next_nonce) increments the
/// counter and returns the new value, so nonces never repeat even when the
/// provider is shared between threads.
#[derive(Debug)]
pub struct IncreasingNonce {
    counter: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new provider seeded from the current time.
    pub fn new() -> Self {
        Self::starting_at(Self::current_time_nanos())
    }

    /// Create a provider whose first nonce will be `seed + 1`.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    /// The most recently issued nonce (or the seed, if none were issued).
    pub fn last_nonce(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    fn current_time_nanos() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_nonce_increments_by_one() {
        let provider = IncreasingNonce::starting_at(0);

        assert_eq!(provider.next_nonce(), 1);
        assert_eq!(provider.next_nonce(), 2);
        assert_eq!(provider.next_nonce(), 3);
        assert_eq!(provider.last_nonce(), 3);
    }

    #[test]
    fn test_nonce_seeded_from_clock() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let provider = IncreasingNonce::new();

        assert!(provider.next_nonce() > before);
    }

    #[test]
    fn test_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = provider.next_nonce();
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert_eq!(nonce, last + 1);
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_unique_across_threads() {
        let provider = Arc::new(IncreasingNonce::starting_at(100));
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }

        assert_eq!(all_nonces.len(), 4000);
        assert_eq!(provider.last_nonce(), 4100);
    }

    #[test]
    fn test_independent_providers() {
        let a = IncreasingNonce::starting_at(10);
        let b = IncreasingNonce::starting_at(10);

        assert_eq!(a.next_nonce(), 11);
        assert_eq!(a.next_nonce(), 12);
        assert_eq!(b.next_nonce(), 11);
    }
}

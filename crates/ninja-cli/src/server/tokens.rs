//! Single-use submit tokens.
//!
//! Every rendered form carries a fresh token. A post is accepted once per
//! token; a repeated or token-less post is treated as a submission already in
//! flight and never reaches the backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Outstanding tokens kept before the oldest are forgotten.
const CAPACITY: usize = 4096;

#[derive(Debug, Clone)]
pub struct SubmitTokens {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    prefix: String,
    counter: AtomicU64,
    issued: Mutex<VecDeque<String>>,
}

impl Default for SubmitTokens {
    fn default() -> Self {
        let started = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self {
            inner: Arc::new(Inner {
                prefix: format!("{started:x}"),
                counter: AtomicU64::new(0),
                issued: Mutex::new(VecDeque::new()),
            }),
        }
    }
}

impl SubmitTokens {
    pub fn issue(&self) -> String {
        let n = self.inner.counter.fetch_add(1, Ordering::Relaxed);
        let token = format!("{}-{n:x}", self.inner.prefix);
        if let Ok(mut issued) = self.inner.issued.lock() {
            if issued.len() >= CAPACITY {
                issued.pop_front();
            }
            issued.push_back(token.clone());
        }
        token
    }

    /// Spend a token. `false` if it was never issued or is already spent.
    pub fn redeem(&self, token: &str) -> bool {
        let Ok(mut issued) = self.inner.issued.lock() else {
            return false;
        };
        match issued.iter().position(|t| t == token) {
            Some(index) => {
                issued.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_single_use() {
        let tokens = SubmitTokens::default();
        let first = tokens.issue();
        let second = tokens.issue();
        assert_ne!(first, second);

        assert!(tokens.redeem(&first));
        assert!(!tokens.redeem(&first));
        assert!(tokens.redeem(&second));
        assert!(!tokens.redeem("made-up"));
    }

    #[test]
    fn clones_share_one_ledger() {
        let tokens = SubmitTokens::default();
        let token = tokens.clone().issue();
        assert!(tokens.redeem(&token));
    }

    #[test]
    fn oldest_tokens_are_forgotten_past_capacity() {
        let tokens = SubmitTokens::default();
        let oldest = tokens.issue();
        for _ in 0..CAPACITY {
            tokens.issue();
        }
        assert!(!tokens.redeem(&oldest));
    }
}

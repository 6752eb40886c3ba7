use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AnalyticsError, Result};

/// A cooperative cancellation signal, checked at the safe points documented
/// by each long-running analysis (between bipartitions, between `(d, o)`
/// pairs, between cycles, ...).
///
/// Cloning shares the same underlying flag; cancelling any clone cancels all
/// of them. There is no partial-result contract: once cancelled, an
/// in-progress call fails with [`AnalyticsError::Cancelled`].
#[derive(Clone, Debug)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a fresh, not-yet-cancelled token.
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A token that can never be cancelled, for callers that don't need
    /// cooperative cancellation.
    pub fn none() -> Self {
        Self::new()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Returns `Err(Cancelled)` if the token has been cancelled, `Ok(())`
    /// otherwise. Call at the safe points named in a method's docs.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(AnalyticsError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn cancel_is_observed_by_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(AnalyticsError::Cancelled));
    }
}

//! Scope-bound cancellation for in-flight requests.
//!
//! Each interactive scope (one form instance, one page view) owns a
//! [`CancelGuard`]; flows hold a [`CancelToken`]. Dropping the guard — or
//! calling [`CancelGuard::cancel`] — aborts whatever the token is awaiting.

use tokio::sync::watch;

/// Owning side of a cancellation scope. Cancels on drop.
#[derive(Debug)]
pub struct CancelGuard {
    tx: watch::Sender<bool>,
}

impl CancelGuard {
    /// Create a guard/token pair for one scope.
    pub fn new() -> (Self, CancelToken) {
        let (tx, rx) = watch::channel(false);
        (
            Self { tx },
            CancelToken {
                rx,
                _keepalive: None,
            },
        )
    }

    /// Cancel explicitly (teardown before drop).
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Mint another token bound to the same scope.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
            _keepalive: None,
        }
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(true);
    }
}

/// Borrowed side of a cancellation scope.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
    // Keeps the channel open for tokens made via `never()`.
    _keepalive: Option<std::sync::Arc<watch::Sender<bool>>>,
}

impl CancelToken {
    /// A token that can never fire; for callers without a teardown scope.
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            rx,
            _keepalive: Some(std::sync::Arc::new(tx)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the scope is cancelled. A dropped guard counts as
    /// cancellation.
    pub async fn cancelled(&mut self) {
        // wait_for errs when the sender is gone, i.e. the scope was torn down.
        let _ = self.rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Drive `fut` until it completes or the scope is cancelled.
///
/// Returns `None` on cancellation; an already-cancelled token wins even if
/// `fut` is immediately ready.
pub async fn run_until_cancelled<F: Future>(
    cancel: &mut CancelToken,
    fut: F,
) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        output = fut => Some(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_when_not_cancelled() {
        let (_guard, mut token) = CancelGuard::new();
        let out = run_until_cancelled(&mut token, async { 7 }).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn cancelled_scope_aborts_pending_future() {
        let (guard, mut token) = CancelGuard::new();
        guard.cancel();
        let out = run_until_cancelled(&mut token, std::future::pending::<()>()).await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn dropping_the_guard_cancels() {
        let (guard, mut token) = CancelGuard::new();
        drop(guard);
        let out = run_until_cancelled(&mut token, std::future::pending::<()>()).await;
        assert_eq!(out, None);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn never_token_lets_futures_complete() {
        let mut token = CancelToken::never();
        assert!(!token.is_cancelled());
        let out = run_until_cancelled(&mut token, async { "done" }).await;
        assert_eq!(out, Some("done"));
    }
}

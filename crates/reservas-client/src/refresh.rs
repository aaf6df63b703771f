//! Single-flight access-token refresh.
//!
//! When several requests fail with `401` at once, only the first one calls
//! the refresh endpoint. The others park on a oneshot channel and receive
//! the same outcome once the refresh settles:
//!
//! ```text
//! Idle ──first 401──▶ Refreshing { waiters } ──settled──▶ Idle
//!                          ▲        │
//!                  later 401s push  └─ every waiter gets the leader's result
//! ```
//!
//! The state lives behind a `std::sync::Mutex` that is never held across an
//! await. The switch to `Refreshing` happens inside the critical section, so
//! two concurrent callers can never both become the leader.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use reservas_core::error::AppError;
use reservas_core::result::AppResult;

type Waiter = oneshot::Sender<AppResult<String>>;

enum RefreshState {
    Idle,
    Refreshing { waiters: Vec<Waiter> },
}

/// Coordinates concurrent refresh attempts so at most one is in flight.
pub struct RefreshGuard {
    state: Mutex<RefreshState>,
}

enum Turn {
    Leader,
    Follower(oneshot::Receiver<AppResult<String>>),
}

impl RefreshGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefreshState::Idle),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        // The state is always left consistent before any code that can panic.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether a refresh is currently in flight.
    pub fn is_refreshing(&self) -> bool {
        matches!(*self.lock(), RefreshState::Refreshing { .. })
    }

    /// Number of callers parked behind the in-flight refresh.
    pub fn waiting(&self) -> usize {
        match &*self.lock() {
            RefreshState::Idle => 0,
            RefreshState::Refreshing { waiters } => waiters.len(),
        }
    }

    /// Obtain a fresh access token.
    ///
    /// The first caller runs `refresh`; callers arriving while it is in flight
    /// wait for its result instead of starting their own. Every caller gets
    /// the same token or the same error.
    pub async fn run<F, Fut>(&self, refresh: F) -> AppResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<String>>,
    {
        let turn = {
            let mut state = self.lock();
            match &mut *state {
                RefreshState::Refreshing { waiters } => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    debug!(waiting = waiters.len(), "Refresh in flight, queueing request");
                    Turn::Follower(rx)
                }
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing {
                        waiters: Vec::new(),
                    };
                    Turn::Leader
                }
            }
        };

        match turn {
            Turn::Follower(rx) => rx.await.unwrap_or_else(|_| {
                Err(AppError::authentication(
                    "La renovación de la sesión fue interrumpida",
                ))
            }),
            Turn::Leader => {
                let reset = ResetOnDrop { guard: Some(self) };
                let result = refresh().await;
                let waiters = reset.settle();

                if result.is_err() {
                    warn!(waiters = waiters.len(), "Token refresh failed");
                }
                for waiter in waiters {
                    // A waiter that gave up has dropped its receiver.
                    let _ = waiter.send(result.clone());
                }
                result
            }
        }
    }
}

impl Default for RefreshGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RefreshGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshGuard")
            .field("refreshing", &self.is_refreshing())
            .field("waiting", &self.waiting())
            .finish()
    }
}

/// Returns the guard to `Idle` if the leader is dropped mid-refresh.
///
/// Dropping the queued senders wakes every waiter with a receive error.
struct ResetOnDrop<'a> {
    guard: Option<&'a RefreshGuard>,
}

impl ResetOnDrop<'_> {
    /// Go back to `Idle` and hand over the queued waiters.
    fn settle(mut self) -> Vec<Waiter> {
        match self.guard.take() {
            Some(guard) => take_waiters(guard),
            None => Vec::new(),
        }
    }
}

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            let abandoned = take_waiters(guard);
            warn!(waiters = abandoned.len(), "Token refresh abandoned");
        }
    }
}

fn take_waiters(guard: &RefreshGuard) -> Vec<Waiter> {
    let mut state = guard.lock();
    match std::mem::replace(&mut *state, RefreshState::Idle) {
        RefreshState::Idle => Vec::new(),
        RefreshState::Refreshing { waiters } => waiters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use reservas_core::error::ErrorKind;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_single_caller_runs_refresh() {
        let guard = RefreshGuard::new();
        let token = guard
            .run(|| async { Ok("nuevo".to_string()) })
            .await
            .unwrap();
        assert_eq!(token, "nuevo");
        assert!(!guard.is_refreshing());
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_refresh() {
        let guard = Arc::new(RefreshGuard::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());

        let leader = {
            let guard = guard.clone();
            let calls = calls.clone();
            let release = release.clone();
            tokio::spawn(async move {
                guard
                    .run(|| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        release.notified().await;
                        Ok("compartido".to_string())
                    })
                    .await
            })
        };

        while !guard.is_refreshing() {
            tokio::task::yield_now().await;
        }

        let followers: Vec<_> = (0..4)
            .map(|_| {
                let guard = guard.clone();
                let calls = calls.clone();
                tokio::spawn(async move {
                    guard
                        .run(|| async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            Ok("otro".to_string())
                        })
                        .await
                })
            })
            .collect();

        while guard.waiting() < 4 {
            tokio::task::yield_now().await;
        }
        release.notify_one();

        assert_eq!(leader.await.unwrap().unwrap(), "compartido");
        for follower in followers {
            assert_eq!(follower.await.unwrap().unwrap(), "compartido");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!guard.is_refreshing());
    }

    #[tokio::test]
    async fn test_failure_reaches_every_waiter() {
        let guard = Arc::new(RefreshGuard::new());
        let release = Arc::new(Notify::new());

        let leader = {
            let guard = guard.clone();
            let release = release.clone();
            tokio::spawn(async move {
                guard
                    .run(|| async move {
                        release.notified().await;
                        Err(AppError::session_expired())
                    })
                    .await
            })
        };
        while !guard.is_refreshing() {
            tokio::task::yield_now().await;
        }

        let follower = {
            let guard = guard.clone();
            tokio::spawn(async move { guard.run(|| async { Ok("x".to_string()) }).await })
        };
        while guard.waiting() < 1 {
            tokio::task::yield_now().await;
        }
        release.notify_one();

        let leader_err = leader.await.unwrap().unwrap_err();
        let follower_err = follower.await.unwrap().unwrap_err();
        assert_eq!(leader_err.kind, ErrorKind::Authentication);
        assert_eq!(follower_err.kind, ErrorKind::Authentication);
        assert!(!guard.is_refreshing());
    }

    #[tokio::test]
    async fn test_dropped_leader_resets_guard() {
        let guard = Arc::new(RefreshGuard::new());

        let leader = {
            let guard = guard.clone();
            tokio::spawn(async move {
                guard
                    .run(|| async {
                        tokio::time::sleep(Duration::from_secs(3600)).await;
                        Ok("nunca".to_string())
                    })
                    .await
            })
        };
        while !guard.is_refreshing() {
            tokio::task::yield_now().await;
        }

        let follower = {
            let guard = guard.clone();
            tokio::spawn(async move { guard.run(|| async { Ok("x".to_string()) }).await })
        };
        while guard.waiting() < 1 {
            tokio::task::yield_now().await;
        }

        leader.abort();
        let _ = leader.await;

        let err = follower.await.unwrap().unwrap_err();
        assert!(err.is_login_required());
        assert!(!guard.is_refreshing());

        let token = guard
            .run(|| async { Ok("despues".to_string()) })
            .await
            .unwrap();
        assert_eq!(token, "despues");
    }
}

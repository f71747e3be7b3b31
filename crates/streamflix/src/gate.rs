//! One-shot readiness barrier

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use streamflix_core::{CatalogError, Result};
use tokio::sync::watch;

/// Barrier that holds callers back until a dependency has been supplied.
///
/// The gate starts pending and makes exactly one transition to ready, carrying
/// the dependency handle with it. Every waiter, whether it arrived before or
/// after the transition, receives the same handle. Opening an already-open gate
/// is a no-op.
pub struct ReadinessGate<T: ?Sized> {
    tx: watch::Sender<Option<Arc<T>>>,
}

impl<T: ?Sized> ReadinessGate<T> {
    /// Create a pending gate
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Open the gate with `handle`, waking every waiter.
    ///
    /// Returns `false` if the gate was already open; the first handle is kept.
    pub fn open(&self, handle: Arc<T>) -> bool {
        let opened = self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                return false;
            }
            *slot = Some(handle);
            true
        });

        if opened {
            tracing::info!(waiters = self.tx.receiver_count(), "readiness gate opened");
        } else {
            tracing::debug!("readiness gate already open, ignoring signal");
        }
        opened
    }

    /// Whether the gate has opened
    pub fn is_ready(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// The handle, if the gate is open. Never waits.
    pub fn get(&self) -> Option<Arc<T>> {
        self.tx.borrow().clone()
    }

    /// Wait until the gate opens and return the handle.
    ///
    /// Waits forever if nobody ever opens the gate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DependencyUnavailable`] only if the gate is torn
    /// down while waiting.
    pub async fn wait(&self) -> Result<Arc<T>> {
        let mut rx = self.tx.subscribe();
        let ready = rx
            .wait_for(|slot| slot.is_some())
            .await
            .map_err(|_| CatalogError::DependencyUnavailable("readiness gate dropped".into()))?;
        let handle: Option<Arc<T>> = (*ready).clone();
        drop(ready);

        handle.ok_or_else(|| CatalogError::Internal("readiness gate opened without a handle".into()))
    }

    /// Like [`wait`](Self::wait), but give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DependencyUnavailable`] if the gate is still
    /// pending when `timeout` elapses.
    pub async fn wait_timeout(&self, timeout: Duration) -> Result<Arc<T>> {
        match tokio::time::timeout(timeout, self.wait()).await {
            Ok(handle) => handle,
            Err(_) => Err(CatalogError::DependencyUnavailable(format!(
                "catalog client not ready after {timeout:?}"
            ))),
        }
    }
}

impl<T: ?Sized> Default for ReadinessGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ReadinessGate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadinessGate")
            .field("ready", &self.is_ready())
            .finish()
    }
}

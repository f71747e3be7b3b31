use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use streamflix_core::{CatalogError, Result};
use tokio::sync::broadcast;

/// Collapses concurrent misses on the same key into a single remote call.
///
/// The first caller for a key becomes the leader and runs the request; callers
/// arriving while it is in flight subscribe and receive a clone of its result.
pub(crate) struct Coalescer<V: Clone> {
    // Map key -> Broadcast channel sender
    inflight: Arc<DashMap<String, broadcast::Sender<Result<V>>>>,
}

impl<V: Clone> Clone for Coalescer<V> {
    fn clone(&self) -> Self {
        Self {
            inflight: Arc::clone(&self.inflight),
        }
    }
}

impl<V: Clone> Coalescer<V> {
    pub(crate) fn new() -> Self {
        Self {
            inflight: Arc::new(DashMap::new()),
        }
    }

    /// Execute a request with coalescing for the given key.
    /// If a request for this key is already running, wait for its result.
    /// Otherwise, run the request and broadcast the result.
    pub(crate) async fn do_request<F, Fut>(&self, key: &str, f: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        // Scope drops the shard lock before any await
        let action = {
            match self.inflight.entry(key.to_string()) {
                dashmap::mapref::entry::Entry::Occupied(o) => Ok(o.get().subscribe()),
                dashmap::mapref::entry::Entry::Vacant(v) => {
                    let (tx, _rx) = broadcast::channel(1);
                    v.insert(tx.clone());
                    Err(tx)
                }
            }
        };

        match action {
            Ok(mut rx) => match rx.recv().await {
                Ok(res) => res,
                // Leader was cancelled before it could answer
                Err(_) => Err(CatalogError::Internal(format!(
                    "in-flight request abandoned: {key}"
                ))),
            },
            Err(tx) => {
                let guard = InflightGuard {
                    inflight: &self.inflight,
                    key,
                    tx: &tx,
                };
                let result = f().await;

                // Unregister before answering so late callers start a fresh request
                drop(guard);
                if tx.receiver_count() > 0 {
                    let _ = tx.send(result.clone());
                }
                result
            }
        }
    }

    /// Number of keys with a request in flight
    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> usize {
        self.inflight.len()
    }
}

/// Unregisters the leader's key when it finishes or its future is dropped,
/// so followers see a closed channel instead of waiting forever.
///
/// Only removes the entry if it still belongs to this leader's channel.
struct InflightGuard<'a, V> {
    inflight: &'a DashMap<String, broadcast::Sender<Result<V>>>,
    key: &'a str,
    tx: &'a broadcast::Sender<Result<V>>,
}

impl<V> Drop for InflightGuard<'_, V> {
    fn drop(&mut self) {
        self.inflight
            .remove_if(self.key, |_, registered| registered.same_channel(self.tx));
    }
}

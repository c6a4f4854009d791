//! Cancelable subscription handles.
//!
//! A subscription delivers the full current snapshot immediately, then one
//! snapshot per committed write, until canceled. Cancellation is
//! idempotent and effective immediately: the cancel flag is checked
//! synchronously before every callback invocation, so a late-arriving
//! snapshot that was already in flight never reaches a canceled callback.
//! Dropping the handle cancels, so a subscription cannot outlive its owner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::infrastructure::ports::{Snapshot, StoreError};

/// Handle to one live collection subscription.
#[derive(Debug)]
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
    delivery: JoinHandle<()>,
}

impl Subscription {
    /// Deliver `initial` to the callback, then forward every decoded
    /// snapshot from `receiver` until cancellation or channel close.
    pub(crate) fn spawn<D, C, F>(
        initial: D,
        mut receiver: broadcast::Receiver<Snapshot>,
        decode: C,
        callback: F,
    ) -> Self
    where
        D: Send + 'static,
        C: Fn(&[Value]) -> Result<D, StoreError> + Send + 'static,
        F: Fn(D) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));

        // The handle has not been returned yet, so cancellation cannot have
        // happened; the initial snapshot is always delivered.
        callback(initial);

        let flag = Arc::clone(&cancelled);
        let delivery = tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(snapshot) => {
                        if flag.load(Ordering::SeqCst) {
                            break;
                        }
                        match decode(&snapshot) {
                            Ok(decoded) => callback(decoded),
                            Err(err) => {
                                tracing::warn!(error = %err, "dropping undecodable snapshot");
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Snapshots are complete, so the newest one
                        // supersedes everything we missed.
                        tracing::warn!(skipped, "subscription lagged, skipping stale snapshots");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Self {
            cancelled,
            delivery,
        }
    }

    /// Stop all future deliveries. Safe to call more than once; calls after
    /// the first have no effect.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.delivery.abort();
            tracing::debug!("subscription cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

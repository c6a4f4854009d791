//! Aggregate readiness across independent data sources.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

struct ReadyInner {
    pending: AtomicUsize,
    notify: Notify,
}

/// Tracks when a set of independently loading sources have all produced
/// their first data.
///
/// Each source registers a [`SourceFlag`] up front and marks it ready
/// exactly once, typically from its subscription's initial snapshot
/// callback. Readiness is monotonic: once every source has reported, the
/// set stays ready regardless of later deliveries, and marking an
/// already-ready source again has no effect.
pub struct ReadySet {
    inner: Arc<ReadyInner>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ReadyInner {
                pending: AtomicUsize::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Register one source that must report before the set is ready.
    /// Sources must be registered before anyone waits.
    pub fn source(&self) -> SourceFlag {
        self.inner.pending.fetch_add(1, Ordering::SeqCst);
        SourceFlag {
            inner: Arc::clone(&self.inner),
            reported: AtomicBool::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst) == 0
    }

    /// Wait until every registered source has reported. Returns
    /// immediately if the set is already ready.
    pub async fn wait_ready(&self) {
        loop {
            // Arm the notification before re-checking, so a report landing
            // between the check and the await is not missed.
            let notified = self.inner.notify.notified();
            if self.is_ready() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for ReadySet {
    fn default() -> Self {
        Self::new()
    }
}

/// One source's handle into a [`ReadySet`]. Marking is idempotent.
pub struct SourceFlag {
    inner: Arc<ReadyInner>,
    reported: AtomicBool,
}

impl SourceFlag {
    pub fn mark_ready(&self) {
        if self.reported.swap(true, Ordering::SeqCst) {
            return;
        }
        if self.inner.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.notify.notify_waiters();
        }
    }

    pub fn is_marked(&self) -> bool {
        self.reported.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn empty_set_is_immediately_ready() {
        let set = ReadySet::new();
        assert!(set.is_ready());
        set.wait_ready().await;
    }

    #[tokio::test]
    async fn ready_only_after_every_source_reports() {
        let set = ReadySet::new();
        let a = set.source();
        let b = set.source();
        let c = set.source();
        assert!(!set.is_ready());

        // Order of reporting does not matter.
        b.mark_ready();
        c.mark_ready();
        assert!(!set.is_ready());
        a.mark_ready();
        assert!(set.is_ready());
        set.wait_ready().await;
    }

    #[tokio::test]
    async fn marking_twice_cannot_make_the_set_ready_early() {
        let set = ReadySet::new();
        let a = set.source();
        let _b = set.source();

        a.mark_ready();
        a.mark_ready();
        assert!(!set.is_ready());
    }

    #[tokio::test]
    async fn waiters_are_woken_by_the_last_report() {
        let set = Arc::new(ReadySet::new());
        let flag = set.source();

        let waiter = {
            let set = Arc::clone(&set);
            tokio::spawn(async move { set.wait_ready().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        flag.mark_ready();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter wakes")
            .expect("waiter task completes");
        assert!(set.is_ready());
    }

    #[tokio::test]
    async fn readiness_is_monotonic() {
        let set = ReadySet::new();
        let flag = set.source();
        flag.mark_ready();
        assert!(set.is_ready());

        // Later deliveries re-marking the same source change nothing.
        flag.mark_ready();
        assert!(set.is_ready());
    }
}

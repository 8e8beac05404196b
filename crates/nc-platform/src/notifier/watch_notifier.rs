//! Snapshot notifier on top of `tokio::sync::watch`.
//!
//! Every publish replaces the current snapshot and wakes all subscribers.
//! A subscriber that falls behind skips straight to the latest snapshot;
//! since each snapshot is the full history rather than a delta, nothing is
//! lost by that, and a subscriber never observes an older snapshot after a
//! newer one.
//!
//! Subscribers deregister by dropping their [`HistorySubscription`]; this
//! has no effect on delivery to anyone else.

use nc_core::ports::HistoryNotifierPort;
use nc_core::HistorySnapshot;
use tokio::sync::watch;

pub struct WatchHistoryNotifier {
    tx: watch::Sender<HistorySnapshot>,
}

impl WatchHistoryNotifier {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(HistorySnapshot::default());
        Self { tx }
    }

    /// Register a new observer. It starts at the current snapshot, which it
    /// can read via [`HistorySubscription::latest`] without waiting.
    pub fn subscribe(&self) -> HistorySubscription {
        HistorySubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for WatchHistoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryNotifierPort for WatchHistoryNotifier {
    fn publish(&self, snapshot: HistorySnapshot) {
        self.tx.send_replace(snapshot);
    }

    fn current(&self) -> HistorySnapshot {
        self.tx.borrow().clone()
    }
}

pub struct HistorySubscription {
    rx: watch::Receiver<HistorySnapshot>,
}

impl HistorySubscription {
    /// Wait for the next snapshot not yet seen by this subscriber.
    ///
    /// Returns `None` once the notifier is gone.
    pub async fn changed(&mut self) -> Option<HistorySnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn latest(&self) -> HistorySnapshot {
        self.rx.borrow().clone()
    }
}

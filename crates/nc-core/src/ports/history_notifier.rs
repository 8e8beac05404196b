use crate::HistorySnapshot;

/// One-to-many publisher of history snapshots.
///
/// Every publish carries the full state, so implementations may coalesce
/// bursts as long as each observer ends up with the latest snapshot and
/// never sees an older one after a newer one.
pub trait HistoryNotifierPort: Send + Sync {
    fn publish(&self, snapshot: HistorySnapshot);

    /// Latest published snapshot, for pull-style queries.
    fn current(&self) -> HistorySnapshot;
}

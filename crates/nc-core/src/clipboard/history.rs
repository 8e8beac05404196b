//! Bounded, content-deduplicated clipboard history.
//!
//! The store is an ordered list, most recent first. Inserting content that is
//! already present promotes the existing entry to the front instead of
//! duplicating it; inserting past the capacity drops the oldest entry.
//!
//! ```text
//! upsert A, B, A   ->  [A, B]
//! upsert 51 texts  ->  50 entries, first one evicted
//! ```
//!
//! The store performs no I/O and has exactly one mutator, [`ClipboardHistory::upsert_front`].
//! Readers only ever receive a [`HistorySnapshot`], an immutable shared copy.

use std::collections::VecDeque;
use std::ops::Deref;
use std::sync::Arc;

use super::{ClipboardEntry, ClipboardItemView, DedupKey};

pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Immutable, ordered copy of the history (rank 0 first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot(Arc<[ClipboardEntry]>);

impl HistorySnapshot {
    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.0
    }

    pub fn to_views(&self) -> Vec<ClipboardItemView> {
        self.0.iter().map(ClipboardItemView::from).collect()
    }
}

impl Default for HistorySnapshot {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Deref for HistorySnapshot {
    type Target = [ClipboardEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<ClipboardEntry> for HistorySnapshot {
    fn from_iter<I: IntoIterator<Item = ClipboardEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug)]
pub struct ClipboardHistory {
    entries: VecDeque<ClipboardEntry>,
    capacity: usize,
}

impl ClipboardHistory {
    /// `capacity` is clamped to at least one entry.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert `entry` at rank 0, promoting any entry with the same dedup key.
    ///
    /// The relative order of every other entry is preserved. Returns the
    /// resulting snapshot.
    pub fn upsert_front(&mut self, entry: ClipboardEntry) -> HistorySnapshot {
        if let Some(pos) = self.position_of(entry.dedup_key()) {
            self.entries.remove(pos);
        }

        self.entries.push_front(entry);

        if self.entries.len() > self.capacity {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                evicted = self.entries.len() - self.capacity,
                capacity = self.capacity,
                "clipboard history over capacity, evicting oldest"
            );
            self.entries.truncate(self.capacity);
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.entries.iter().cloned().collect()
    }

    /// Current rank of the entry holding `key`, if any.
    pub fn position_of(&self, key: &DedupKey) -> Option<usize> {
        self.entries.iter().position(|e| e.dedup_key() == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

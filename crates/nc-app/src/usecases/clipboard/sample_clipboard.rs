//! Clipboard sampler
//!
//! One call to [`ClipboardSampler::poll_once`] is one poll cycle: read the
//! system clipboard for each supported kind, skip values already seen on a
//! previous cycle, normalize whatever is new, upsert it into the history and
//! publish the resulting snapshot.
//!
//! ```text
//! tick
//!   → SystemClipboardPort::read_text / read_image
//!   → last-seen check (string / bitmap fingerprint)
//!   → ContentNormalizer
//!   → ClipboardHistory::upsert_front
//!   → HistoryNotifierPort::publish
//! ```
//!
//! The sampler owns the history store and is its only writer. It knows
//! nothing about timers: the platform runtime decides when to call it, and
//! tests drive it cycle by cycle.

use std::sync::Arc;

use nc_core::ports::{ClockPort, HistoryNotifierPort, SystemClipboardPort};
use nc_core::{ClipboardHistory, EntryKind, HistorySnapshot, RawImage};
use tracing::{debug, instrument};

use crate::normalizer::{ContentNormalizer, ImageFingerprint, NormalizedContent};

/// What changed during one poll cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    pub text_changed: bool,
    pub image_changed: bool,
}

impl PollOutcome {
    pub fn changed(&self) -> bool {
        self.text_changed || self.image_changed
    }
}

/// Result of reading one kind from the clipboard.
enum Sample<T> {
    Present(T),
    Absent,
    /// Read failed; keeps the last-seen marker untouched.
    Failed,
}

/// Per-kind memory of the last clipboard value processed.
///
/// A marker is cleared when its kind disappears from the clipboard, so
/// copying the same content again after something else is captured anew
/// (and promoted).
#[derive(Debug, Default)]
struct LastSeen {
    text: Option<String>,
    image: Option<ImageFingerprint>,
}

pub struct ClipboardSampler {
    clipboard: Arc<dyn SystemClipboardPort>,
    normalizer: ContentNormalizer,
    notifier: Arc<dyn HistoryNotifierPort>,
    clock: Arc<dyn ClockPort>,
    history: ClipboardHistory,
    last_seen: LastSeen,
}

impl ClipboardSampler {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        normalizer: ContentNormalizer,
        notifier: Arc<dyn HistoryNotifierPort>,
        clock: Arc<dyn ClockPort>,
        max_entries: usize,
    ) -> Self {
        Self {
            clipboard,
            normalizer,
            notifier,
            clock,
            history: ClipboardHistory::with_capacity(max_entries),
            last_seen: LastSeen::default(),
        }
    }

    /// Run one poll cycle.
    ///
    /// Never fails: an unreadable clipboard is indistinguishable from an
    /// unchanged one and simply yields no change.
    #[instrument(level = "trace", skip_all)]
    pub async fn poll_once(&mut self) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        match self.read_text().await {
            Sample::Present(text) => outcome.text_changed = self.observe_text(text),
            Sample::Absent => self.last_seen.text = None,
            Sample::Failed => {}
        }

        match self.read_image().await {
            Sample::Present(image) => outcome.image_changed = self.observe_image(&image),
            Sample::Absent => self.last_seen.image = None,
            Sample::Failed => {}
        }

        outcome
    }

    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    fn observe_text(&mut self, text: String) -> bool {
        if self.last_seen.text.as_deref() == Some(text.as_str()) {
            return false;
        }
        let Some(normalized) = self.normalizer.normalize_text(&text) else {
            return false;
        };

        self.last_seen.text = Some(text);
        self.record(normalized);
        true
    }

    fn observe_image(&mut self, image: &RawImage) -> bool {
        let fingerprint = self.normalizer.fingerprint_image(image);
        if self.last_seen.image.as_ref() == Some(&fingerprint) {
            return false;
        }

        self.last_seen.image = Some(fingerprint);
        match self.normalizer.normalize_image(image) {
            Some(normalized) => {
                self.record(normalized);
                true
            }
            None => false,
        }
    }

    fn record(&mut self, normalized: NormalizedContent) {
        let entry = normalized.into_entry(self.clock.now_ms());
        let kind = entry.kind();

        let snapshot = self.history.upsert_front(entry);
        debug!(
            kind = match kind {
                EntryKind::Text => "text",
                EntryKind::Image => "image",
            },
            history_len = snapshot.len(),
            "clipboard history updated"
        );

        self.notifier.publish(snapshot);
    }

    async fn read_text(&self) -> Sample<String> {
        match self.clipboard.read_text().await {
            Ok(Some(text)) if !text.is_empty() => Sample::Present(text),
            Ok(_) => Sample::Absent,
            Err(err) => {
                debug!(error = %err, "clipboard text read failed");
                Sample::Failed
            }
        }
    }

    async fn read_image(&self) -> Sample<RawImage> {
        match self.clipboard.read_image().await {
            Ok(Some(image)) if !image.is_empty() => Sample::Present(image),
            Ok(_) => Sample::Absent,
            Err(err) => {
                debug!(error = %err, "clipboard image read failed");
                Sample::Failed
            }
        }
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ContentHash, MimeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Text,
    Image,
}

impl EntryKind {
    pub fn mime(&self) -> MimeType {
        match self {
            EntryKind::Text => MimeType::text_plain(),
            EntryKind::Image => MimeType::image_png(),
        }
    }
}

/// Value deciding whether two entries hold the same clipboard content.
///
/// The variant carries the kind, so a text entry and an image entry can never
/// compare equal even if their string forms happen to match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    Text(Arc<str>),
    Image(ContentHash),
}

impl DedupKey {
    pub fn kind(&self) -> EntryKind {
        match self {
            DedupKey::Text(_) => EntryKind::Text,
            DedupKey::Image(_) => EntryKind::Image,
        }
    }
}

/// One retained clipboard capture.
///
/// The payload is reference counted: clones, and therefore snapshots, share
/// it with the store. A text key shares the payload allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    key: DedupKey,
    payload: Arc<str>,
    captured_at_ms: i64,
}

impl ClipboardEntry {
    pub fn text(text: impl Into<Arc<str>>, captured_at_ms: i64) -> Self {
        let text = text.into();
        Self {
            key: DedupKey::Text(Arc::clone(&text)),
            payload: text,
            captured_at_ms,
        }
    }

    /// `data_url` is the renderable payload, `digest` the hash of its encoded bytes.
    pub fn image(data_url: impl Into<Arc<str>>, digest: ContentHash, captured_at_ms: i64) -> Self {
        Self {
            key: DedupKey::Image(digest),
            payload: data_url.into(),
            captured_at_ms,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.key.kind()
    }

    pub fn dedup_key(&self) -> &DedupKey {
        &self.key
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn captured_at_ms(&self) -> i64 {
        self.captured_at_ms
    }
}

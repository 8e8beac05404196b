use serde::{Deserialize, Serialize};

use super::ClipboardEntry;

/// Entry shape handed to the presentation shell.
///
/// `content` is the raw text for `text/plain` and a data URL for `image/png`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItemView {
    pub format: String,
    pub content: String,
    pub timestamp: i64,
}

impl From<&ClipboardEntry> for ClipboardItemView {
    fn from(entry: &ClipboardEntry) -> Self {
        Self {
            format: entry.kind().mime().to_string(),
            content: entry.payload().to_string(),
            timestamp: entry.captured_at_ms(),
        }
    }
}

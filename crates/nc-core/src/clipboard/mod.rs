//! Clipboard domain models.
pub mod data_url;
mod entry;
mod hash;
mod history;
mod mime;
mod system;
mod view;

pub use entry::{ClipboardEntry, DedupKey, EntryKind};
pub use hash::{ContentHash, HashAlgorithm};
pub use history::{ClipboardHistory, HistorySnapshot, DEFAULT_MAX_ENTRIES};
pub use mime::MimeType;
pub use system::RawImage;
pub use view::ClipboardItemView;

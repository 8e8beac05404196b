mod copy_entry_to_clipboard;
mod get_clipboard_history;
mod sample_clipboard;

pub use copy_entry_to_clipboard::{CopyEntryError, CopyEntryToClipboard};
pub use get_clipboard_history::GetClipboardHistory;
pub use sample_clipboard::{ClipboardSampler, PollOutcome};

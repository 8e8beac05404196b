//! Port interfaces for the application layer
//!
//! Ports define the contract between the clipboard engine (use cases)
//! and infrastructure / platform implementations. This follows Hexagonal
//! Architecture principles, so the history logic can be exercised without
//! a real clipboard, timer or UI.

pub mod clipboard;
mod clock;
mod hash;
mod history_notifier;
mod image_codec;

pub use clipboard::{ClipboardAccessError, SystemClipboardPort};
pub use clock::*;
pub use hash::*;
pub use history_notifier::HistoryNotifierPort;
pub use image_codec::{ImageCodecError, ImageCodecPort};

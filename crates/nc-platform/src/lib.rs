//! # nc-platform
//!
//! Platform-specific implementations for NotchClip.
//!
//! This crate contains the pieces that touch the operating system or drive
//! the engine over time: the system clipboard adapter, the polling runtime
//! and the snapshot notifier.

pub mod clipboard;
pub mod notifier;
pub mod ports;
pub mod runtime;

pub use clipboard::ArboardClipboard;
pub use notifier::{HistorySubscription, WatchHistoryNotifier};
pub use runtime::clipboard::PollingClipboardRuntime;

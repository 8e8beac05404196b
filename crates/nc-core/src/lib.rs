//! # nc-core
//!
//! Core domain models and the clipboard history engine for NotchClip.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the entry model, the bounded deduplicating history store, configuration DTOs
//! and the ports implemented by the infra and platform layers.

pub mod clipboard;
pub mod config;
pub mod ports;

pub use clipboard::{
    ClipboardEntry, ClipboardHistory, ClipboardItemView, ContentHash, DedupKey, EntryKind,
    HashAlgorithm, HistorySnapshot, MimeType, RawImage,
};
pub use config::AppConfig;

//! NotchClip application layer
//!
//! Clipboard history use cases: sampling the system clipboard into the
//! history store, serving snapshots to the shell and copying entries back.

pub mod normalizer;
pub mod usecases;

pub use normalizer::{ContentNormalizer, ImageFingerprint, NormalizedContent};
pub use usecases::clipboard::{
    ClipboardSampler, CopyEntryError, CopyEntryToClipboard, GetClipboardHistory, PollOutcome,
};

//! Content normalizer
//!
//! Turns a raw clipboard read into the payload stored in history plus the
//! key used for deduplication:
//!
//! | kind  | payload                         | dedup key                      |
//! |-------|---------------------------------|--------------------------------|
//! | text  | the string                      | the string                     |
//! | image | `data:image/png;base64,...`     | digest of the encoded PNG      |
//!
//! Empty reads normalize to `None`: an empty clipboard is not a history event.

use std::sync::Arc;

use nc_core::clipboard::data_url::png_data_url;
use nc_core::ports::{ContentHashPort, ImageCodecPort};
use nc_core::{ClipboardEntry, ContentHash, DedupKey, RawImage};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedContent {
    pub key: DedupKey,
    pub payload: String,
}

impl NormalizedContent {
    pub fn into_entry(self, captured_at_ms: i64) -> ClipboardEntry {
        match self.key {
            DedupKey::Text(text) => ClipboardEntry::text(text, captured_at_ms),
            DedupKey::Image(digest) => ClipboardEntry::image(self.payload, digest, captured_at_ms),
        }
    }
}

pub struct ContentNormalizer {
    hasher: Arc<dyn ContentHashPort>,
    codec: Arc<dyn ImageCodecPort>,
}

impl ContentNormalizer {
    pub fn new(hasher: Arc<dyn ContentHashPort>, codec: Arc<dyn ImageCodecPort>) -> Self {
        Self { hasher, codec }
    }

    pub fn normalize_text(&self, text: &str) -> Option<NormalizedContent> {
        if text.is_empty() {
            return None;
        }
        Some(NormalizedContent {
            key: DedupKey::Text(text.into()),
            payload: text.to_string(),
        })
    }

    /// Encode `image` as PNG and key it by the digest of the encoded bytes.
    ///
    /// A bitmap the codec cannot encode is dropped with a warning; it never
    /// reaches the store.
    pub fn normalize_image(&self, image: &RawImage) -> Option<NormalizedContent> {
        if image.is_empty() {
            return None;
        }

        let png = match self.codec.encode_png(image) {
            Ok(png) => png,
            Err(err) => {
                warn!(error = %err, "dropping clipboard image that could not be encoded");
                return None;
            }
        };

        let digest = self.hasher.hash_bytes(&png);
        Some(NormalizedContent {
            key: DedupKey::Image(digest),
            payload: png_data_url(&png),
        })
    }

    /// Cheap identity of a raw bitmap, used to skip unchanged reads before
    /// paying for PNG encoding.
    pub fn fingerprint_image(&self, image: &RawImage) -> ImageFingerprint {
        ImageFingerprint {
            width: image.width,
            height: image.height,
            digest: self.hasher.hash_bytes(&image.rgba),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFingerprint {
    width: usize,
    height: usize,
    digest: ContentHash,
}

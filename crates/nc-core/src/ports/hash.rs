use crate::ContentHash;

/// Digest used as the dedup key of image entries.
///
/// Must be deterministic: equal input bytes always yield the same hash.
pub trait ContentHashPort: Send + Sync {
    fn hash_bytes(&self, bytes: &[u8]) -> ContentHash;
}

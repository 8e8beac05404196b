use std::sync::Arc;

use nc_core::clipboard::data_url::decode_png_data_url;
use nc_core::ports::{
    ClipboardAccessError, HistoryNotifierPort, ImageCodecError, ImageCodecPort,
    SystemClipboardPort,
};
use nc_core::EntryKind;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CopyEntryError {
    #[error("no history entry at index {0}")]
    NotFound(usize),

    #[error("image entry does not hold a png data url")]
    InvalidPayload,

    #[error(transparent)]
    Codec(#[from] ImageCodecError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardAccessError),
}

/// Copy a history entry back into the system clipboard.
///
/// The history itself is not touched here. The sampler observes the write on
/// its next cycle and promotes the entry through the regular upsert path, so
/// the store keeps a single writer.
pub struct CopyEntryToClipboard {
    notifier: Arc<dyn HistoryNotifierPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    codec: Arc<dyn ImageCodecPort>,
}

impl CopyEntryToClipboard {
    pub fn new(
        notifier: Arc<dyn HistoryNotifierPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        codec: Arc<dyn ImageCodecPort>,
    ) -> Self {
        Self {
            notifier,
            clipboard,
            codec,
        }
    }

    /// `index` is the rank in the latest published snapshot.
    pub async fn execute(&self, index: usize) -> Result<EntryKind, CopyEntryError> {
        let snapshot = self.notifier.current();
        let entry = snapshot.get(index).ok_or(CopyEntryError::NotFound(index))?;

        match entry.kind() {
            EntryKind::Text => {
                self.clipboard
                    .write_text(entry.payload().to_string())
                    .await?;
            }
            EntryKind::Image => {
                let png =
                    decode_png_data_url(entry.payload()).ok_or(CopyEntryError::InvalidPayload)?;
                let image = self.codec.decode_png(&png)?;
                self.clipboard.write_image(image).await?;
            }
        }

        info!(index, "copied history entry to clipboard");
        Ok(entry.kind())
    }
}

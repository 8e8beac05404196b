//! System clipboard port - abstracts access to the OS clipboard
//!
//! Only the two supported kinds are exposed: plain text and a single raster
//! image. Any other clipboard content is simply never observed.

use async_trait::async_trait;

use crate::RawImage;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardAccessError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard read failed: {0}")]
    Read(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Current clipboard text, `None` when the clipboard holds no text.
    async fn read_text(&self) -> Result<Option<String>, ClipboardAccessError>;

    /// Current clipboard bitmap, `None` when the clipboard holds no image.
    async fn read_image(&self) -> Result<Option<RawImage>, ClipboardAccessError>;

    async fn write_text(&self, text: String) -> Result<(), ClipboardAccessError>;

    async fn write_image(&self, image: RawImage) -> Result<(), ClipboardAccessError>;
}

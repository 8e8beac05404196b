use crate::RawImage;

#[derive(Debug, thiserror::Error)]
pub enum ImageCodecError {
    #[error("pixel buffer does not match {width}x{height} RGBA ({len} bytes)")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("failed to encode png: {0}")]
    Encode(String),

    #[error("failed to decode png: {0}")]
    Decode(String),
}

/// Converts between clipboard bitmaps and the PNG payload stored in history.
pub trait ImageCodecPort: Send + Sync {
    /// Encode RGBA pixels as PNG. Equal pixels must produce equal bytes.
    fn encode_png(&self, image: &RawImage) -> Result<Vec<u8>, ImageCodecError>;

    fn decode_png(&self, png: &[u8]) -> Result<RawImage, ImageCodecError>;
}

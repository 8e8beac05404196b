//! PNG codec for clipboard bitmaps.
//!
//! Encoding is deterministic for a given pixel buffer, which is what makes
//! the digest of the encoded bytes usable as an image dedup key.

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, ImageFormat};
use nc_core::ports::{ImageCodecError, ImageCodecPort};
use nc_core::RawImage;
use tracing::trace;

pub struct PngImageCodec;

impl PngImageCodec {
    fn dimensions(image: &RawImage) -> Result<(u32, u32), ImageCodecError> {
        let invalid = || ImageCodecError::InvalidDimensions {
            width: image.width,
            height: image.height,
            len: image.rgba.len(),
        };

        let expected = image
            .width
            .checked_mul(image.height)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(invalid)?;
        if expected != image.rgba.len() {
            return Err(invalid());
        }

        let width = u32::try_from(image.width).map_err(|_| invalid())?;
        let height = u32::try_from(image.height).map_err(|_| invalid())?;
        Ok((width, height))
    }
}

impl ImageCodecPort for PngImageCodec {
    fn encode_png(&self, image: &RawImage) -> Result<Vec<u8>, ImageCodecError> {
        let (width, height) = Self::dimensions(image)?;

        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&image.rgba, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| ImageCodecError::Encode(e.to_string()))?;

        trace!(width, height, png_bytes = out.len(), "encoded clipboard image");
        Ok(out)
    }

    fn decode_png(&self, png: &[u8]) -> Result<RawImage, ImageCodecError> {
        let decoded = image::load_from_memory_with_format(png, ImageFormat::Png)
            .map_err(|e| ImageCodecError::Decode(e.to_string()))?
            .into_rgba8();
        let (width, height) = decoded.dimensions();

        Ok(RawImage::new(
            width as usize,
            height as usize,
            decoded.into_raw(),
        ))
    }
}

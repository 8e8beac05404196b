//! `data:` URL helpers for image payloads.
//!
//! Image entries travel to the shell as `data:image/png;base64,...` URLs.

use base64::{engine::general_purpose::STANDARD, Engine as _};

const PNG_PREFIX: &str = "data:image/png;base64,";

pub fn png_data_url(png: &[u8]) -> String {
    let mut url = String::with_capacity(PNG_PREFIX.len() + png.len().div_ceil(3) * 4);
    url.push_str(PNG_PREFIX);
    STANDARD.encode_string(png, &mut url);
    url
}

/// Extract the PNG bytes from a `data:image/png;base64,...` URL.
///
/// Returns `None` for any other media type or a malformed body.
pub fn decode_png_data_url(url: &str) -> Option<Vec<u8>> {
    let body = url.strip_prefix(PNG_PREFIX)?;
    if body.is_empty() {
        return None;
    }
    STANDARD.decode(body).ok()
}

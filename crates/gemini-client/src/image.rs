//! Inline image encoding for multi-part requests.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Guesses the image MIME type from magic bytes; defaults to JPEG.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

/// `data:<mime>;base64,<payload>` URL for an inline image part.
pub fn data_url(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

//! Pixel format conversion helpers for texture producers.

/// Expands tightly packed RGB triples into opaque RGBA quads.
///
/// Trailing bytes that do not form a whole pixel are ignored; callers that
/// care about the length validate it first.
#[must_use]
pub fn rgb_to_rgba(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity((src.len() / 3) * 4);

    for pixel in src.chunks_exact(3) {
        dst.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
    }

    dst
}

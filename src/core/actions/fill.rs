use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;

/// Overwrites every pixel of `rect` inside the target bounds with `colour`.
///
/// Source-over blending is never applied: alpha is copied as-is.
pub fn fill_rect(target: &mut Texture, rect: PixelRect, colour: Colour) {
    let clipped = rect.intersect(&target.bounds());

    if clipped.is_empty() {
        return;
    }

    let stride = target.width() as usize * 4;
    let bytes = colour.to_bytes();
    let x0 = clipped.min().x as usize * 4;
    let x1 = clipped.max().x as usize * 4;
    let data = target.data_mut();

    for y in clipped.min().y..clipped.max().y {
        let row = y as usize * stride;

        for pixel in data[row + x0..row + x1].chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }
}

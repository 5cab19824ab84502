use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;

/// Copies `src_rect` of `src` onto `dst` of `target`, stretching it to fit.
///
/// Sampling is nearest-neighbour and pixels are copied verbatim, alpha
/// included. The destination is clipped to the target bounds and the source
/// rect to the source bounds; an empty rect on either side draws nothing.
pub fn scale_texture(target: &mut Texture, dst: PixelRect, src: &Texture, src_rect: PixelRect) {
    let src_rect = src_rect.intersect(&src.bounds());
    let clipped = dst.intersect(&target.bounds());

    if src_rect.is_empty() || dst.is_empty() || clipped.is_empty() {
        return;
    }

    let dst_width = dst.width() as i64;
    let dst_height = dst.height() as i64;
    let src_width = src_rect.width() as i64;
    let src_height = src_rect.height() as i64;
    let src_stride = src.width() as usize * 4;
    let target_stride = target.width() as usize * 4;
    let src_data = src.data();
    let data = target.data_mut();

    for y in clipped.min().y..clipped.max().y {
        let sy = src_rect.min().y as i64 + (y as i64 - dst.min().y as i64) * src_height / dst_height;
        let src_row = sy as usize * src_stride;
        let dst_row = y as usize * target_stride;

        for x in clipped.min().x..clipped.max().x {
            let sx = src_rect.min().x as i64 + (x as i64 - dst.min().x as i64) * src_width / dst_width;
            let from = src_row + sx as usize * 4;
            let to = dst_row + x as usize * 4;

            data[to..to + 4].copy_from_slice(&src_data[from..from + 4]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelRect {
        PixelRect::new(Point::new(x0, y0), Point::new(x1, y1)).unwrap()
    }

    fn quadrant_texture() -> Texture {
        let mut texture = Texture::new(2, 2);
        texture.set_pixel(Point::new(0, 0), Colour::RED).unwrap();
        texture.set_pixel(Point::new(1, 0), Colour::rgb(0, 255, 0)).unwrap();
        texture.set_pixel(Point::new(0, 1), Colour::rgb(0, 0, 255)).unwrap();
        texture.set_pixel(Point::new(1, 1), Colour::WHITE).unwrap();
        texture
    }

    #[test]
    fn test_scale_up_preserves_quadrants() {
        let src = quadrant_texture();
        let mut target = Texture::new(8, 8);
        let bounds = target.bounds();

        scale_texture(&mut target, bounds, &src, src.bounds());

        assert_eq!(target.pixel(Point::new(0, 0)), Some(Colour::RED));
        assert_eq!(target.pixel(Point::new(3, 3)), Some(Colour::RED));
        assert_eq!(target.pixel(Point::new(4, 0)), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(target.pixel(Point::new(0, 7)), Some(Colour::rgb(0, 0, 255)));
        assert_eq!(target.pixel(Point::new(7, 7)), Some(Colour::WHITE));
    }

    #[test]
    fn test_scale_down_samples_nearest() {
        let mut src = Texture::new(4, 4);
        let left = rect(0, 0, 2, 4);
        src.fill(left, Colour::RED);
        let mut target = Texture::new(2, 1);
        let bounds = target.bounds();

        scale_texture(&mut target, bounds, &src, src.bounds());

        assert_eq!(target.pixel(Point::new(0, 0)), Some(Colour::RED));
        assert_eq!(target.pixel(Point::new(1, 0)), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_scale_into_sub_rect_leaves_rest_untouched() {
        let src = quadrant_texture();
        let mut target = Texture::new(4, 4);

        scale_texture(&mut target, rect(2, 2, 4, 4), &src, src.bounds());

        assert_eq!(target.pixel(Point::new(0, 0)), Some(Colour::TRANSPARENT));
        assert_eq!(target.pixel(Point::new(2, 2)), Some(Colour::RED));
        assert_eq!(target.pixel(Point::new(3, 3)), Some(Colour::WHITE));
    }

    #[test]
    fn test_scale_clips_destination_to_target() {
        let src = quadrant_texture();
        let mut target = Texture::new(2, 2);

        scale_texture(&mut target, rect(-2, -2, 2, 2), &src, src.bounds());

        assert_eq!(target.pixel(Point::new(0, 0)), Some(Colour::WHITE));
        assert_eq!(target.pixel(Point::new(1, 1)), Some(Colour::WHITE));
    }

    #[test]
    fn test_scale_from_source_sub_rect() {
        let src = quadrant_texture();
        let mut target = Texture::new(3, 3);
        let bounds = target.bounds();

        scale_texture(&mut target, bounds, &src, rect(1, 1, 2, 2));

        assert!(target
            .data()
            .chunks_exact(4)
            .all(|pixel| pixel == Colour::WHITE.to_bytes()));
    }

    #[test]
    fn test_empty_source_draws_nothing() {
        let src = Texture::new(0, 0);
        let mut target = Texture::new(2, 2);
        let bounds = target.bounds();

        scale_texture(&mut target, bounds, &src, src.bounds());

        assert!(target.data().iter().all(|&b| b == 0));
    }
}

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub const BAR_HALF_WIDTH: i32 = 60;
pub const BAR_HALF_THICKNESS: i32 = 10;
pub const STEM_HALF_HEIGHT: i32 = 50;
pub const BAR_THICKNESS: i32 = 2 * BAR_HALF_THICKNESS;

/// Horizontal bar and vertical stem of the "T" figure centred on `center`.
///
/// The bar sits on top of the stem, both start `STEM_HALF_HEIGHT` above the
/// centre.
#[must_use]
pub fn t_figure_rects(center: Point) -> [PixelRect; 2] {
    let top = center.y.saturating_sub(STEM_HALF_HEIGHT);

    let bar = PixelRect::new(
        Point::new(center.x.saturating_sub(BAR_HALF_WIDTH), top),
        Point::new(center.x.saturating_add(BAR_HALF_WIDTH), top.saturating_add(BAR_THICKNESS)),
    );
    let stem = PixelRect::new(
        Point::new(center.x.saturating_sub(BAR_HALF_THICKNESS), top),
        Point::new(
            center.x.saturating_add(BAR_HALF_THICKNESS),
            center.y.saturating_add(STEM_HALF_HEIGHT),
        ),
    );

    // Saturating edges keep min <= max on both axes, so neither rect is rejected.
    [bar.unwrap_or_default(), stem.unwrap_or_default()]
}

use crate::controllers::visualizer::ports::window::WindowPort;
use crate::core::actions::t_figure::t_figure_rects;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub const BACKGROUND: Colour = Colour::WHITE;
pub const FIGURE: Colour = Colour::RED;

/// White background over `bounds` with the red "T" centred on `figure_position`.
pub fn draw_default_ui<W: WindowPort + ?Sized>(
    window: &mut W,
    bounds: PixelRect,
    figure_position: Point,
) {
    window.fill(bounds, BACKGROUND);

    for rect in t_figure_rects(figure_position) {
        window.fill(rect, FIGURE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::visualizer::test_support::{RecordingWindow, WindowCall};

    #[test]
    fn test_draws_background_then_bar_then_stem() {
        let mut window = RecordingWindow::default();
        let bounds = PixelRect::from_size(800, 800);

        draw_default_ui(&mut window, bounds, Point::new(400, 400));

        let [bar, stem] = t_figure_rects(Point::new(400, 400));
        assert_eq!(
            window.calls(),
            vec![
                WindowCall::Fill(bounds, Colour::WHITE),
                WindowCall::Fill(bar, Colour::RED),
                WindowCall::Fill(stem, Colour::RED),
            ]
        );
    }
}

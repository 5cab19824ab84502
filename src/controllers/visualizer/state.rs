use crate::controllers::visualizer::default_ui::draw_default_ui;
use crate::controllers::visualizer::events::{Direction, MouseButton, MouseEvent, VisualizerEvent};
use crate::controllers::visualizer::ports::window::WindowPort;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::texture::Texture;

/// Where the "T" is drawn until the first left click.
pub const DEFAULT_FIGURE_POSITION: Point = Point { x: 400, y: 400 };

/// State owned by the visualizer loop. Nothing else mutates it.
#[derive(Debug)]
pub struct VisualizerState {
    bounds: PixelRect,
    figure_position: Point,
    texture: Option<Texture>,
}

impl Default for VisualizerState {
    fn default() -> Self {
        Self {
            bounds: PixelRect::default(),
            figure_position: DEFAULT_FIGURE_POSITION,
            texture: None,
        }
    }
}

impl VisualizerState {
    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    #[must_use]
    pub fn figure_position(&self) -> Point {
        self.figure_position
    }

    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Keeps `texture` for the following paints, dropping any previous one.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn handle_event<W: WindowPort + ?Sized>(&mut self, event: VisualizerEvent, window: &mut W) {
        match event {
            VisualizerEvent::Resize(bounds) => {
                self.bounds = bounds;
                window.resize(bounds);
            }
            VisualizerEvent::Mouse(MouseEvent {
                position,
                button: MouseButton::Left,
                direction: Direction::Press,
            }) => {
                self.figure_position = position;
                window.request_paint();
            }
            VisualizerEvent::Paint => self.paint(window),
            _ => {}
        }
    }

    fn paint<W: WindowPort + ?Sized>(&self, window: &mut W) {
        match &self.texture {
            None => draw_default_ui(window, self.bounds, self.figure_position),
            Some(texture) => window.scale(self.bounds, texture, texture.bounds()),
        }

        window.publish();
    }
}

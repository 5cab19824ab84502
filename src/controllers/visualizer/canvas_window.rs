use std::sync::Arc;

use crate::controllers::visualizer::ports::frame_sink::FrameSink;
use crate::controllers::visualizer::ports::window::WindowPort;
use crate::core::actions::fill::fill_rect;
use crate::core::actions::scale_texture::scale_texture;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;

/// A `WindowPort` that draws into a CPU frame and hands finished frames to a
/// `FrameSink`.
pub struct CanvasWindow {
    frame: Texture,
    sink: Arc<dyn FrameSink>,
}

impl CanvasWindow {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        Self {
            frame: Texture::new(0, 0),
            sink,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &Texture {
        &self.frame
    }
}

impl WindowPort for CanvasWindow {
    fn resize(&mut self, bounds: PixelRect) {
        if bounds.width() != self.frame.width() || bounds.height() != self.frame.height() {
            self.frame = Texture::new(bounds.width(), bounds.height());
        }
    }

    fn fill(&mut self, rect: PixelRect, colour: Colour) {
        fill_rect(&mut self.frame, rect, colour);
    }

    fn scale(&mut self, dst: PixelRect, texture: &Texture, src: PixelRect) {
        scale_texture(&mut self.frame, dst, texture, src);
    }

    fn publish(&mut self) {
        self.sink.publish(self.frame.clone());
    }

    fn request_paint(&self) {
        self.sink.request_paint();
    }

    fn release(&mut self) {
        self.sink.release();
    }
}

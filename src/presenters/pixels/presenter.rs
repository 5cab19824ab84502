use crate::controllers::visualizer::errors::VisualizerError;
use crate::controllers::visualizer::ports::frame_sink::FrameSink;
use crate::core::data::texture::Texture;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use pixels::Pixels;
use pixels::SurfaceTexture;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Owns the `pixels` surface and shows frames published by the visualizer loop.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    buffer_width: u32,
    buffer_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, VisualizerError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_width: width,
            buffer_height: height,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn FrameSink> {
        Arc::clone(&self.adapter) as Arc<dyn FrameSink>
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), VisualizerError> {
        // Minimised windows report a zero size; keep the old surface.
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }

    /// Uploads the newest published frame, if any, and presents it.
    pub fn render(&mut self) -> Result<(), VisualizerError> {
        let Some(frame) = self.adapter.take_frame() else {
            return Ok(());
        };

        if frame.bounds().is_empty() {
            return Ok(());
        }

        self.copy_frame(&frame)?;
        self.pixels.render()?;
        Ok(())
    }

    fn copy_frame(&mut self, frame: &Texture) -> Result<(), VisualizerError> {
        if frame.width() != self.buffer_width || frame.height() != self.buffer_height {
            self.pixels.resize_buffer(frame.width(), frame.height())?;
            self.buffer_width = frame.width();
            self.buffer_height = frame.height();
        }

        self.pixels.frame_mut().copy_from_slice(frame.data());
        Ok(())
    }
}

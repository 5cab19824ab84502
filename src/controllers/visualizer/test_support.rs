//! Recording doubles for the window and frame sink ports.

use std::sync::{Arc, Mutex};

use crate::controllers::visualizer::ports::frame_sink::FrameSink;
use crate::controllers::visualizer::ports::window::WindowPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;

#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    Resize(PixelRect),
    Fill(PixelRect, Colour),
    Scale {
        dst: PixelRect,
        src: PixelRect,
        texture: Texture,
    },
    Publish,
    RequestPaint,
    Release,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingWindow {
    calls: Arc<Mutex<Vec<WindowCall>>>,
}

impl RecordingWindow {
    pub fn calls(&self) -> Vec<WindowCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take_calls(&self) -> Vec<WindowCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn record(&self, call: WindowCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl WindowPort for RecordingWindow {
    fn resize(&mut self, bounds: PixelRect) {
        self.record(WindowCall::Resize(bounds));
    }

    fn fill(&mut self, rect: PixelRect, colour: Colour) {
        self.record(WindowCall::Fill(rect, colour));
    }

    fn scale(&mut self, dst: PixelRect, texture: &Texture, src: PixelRect) {
        self.record(WindowCall::Scale {
            dst,
            src,
            texture: texture.clone(),
        });
    }

    fn publish(&mut self) {
        self.record(WindowCall::Publish);
    }

    fn request_paint(&self) {
        self.record(WindowCall::RequestPaint);
    }

    fn release(&mut self) {
        self.record(WindowCall::Release);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub frames: Mutex<Vec<Texture>>,
    pub paint_requests: Mutex<usize>,
    pub released: Mutex<bool>,
}

impl RecordingSink {
    pub fn last_frame(&self) -> Option<Texture> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl FrameSink for RecordingSink {
    fn publish(&self, frame: Texture) {
        self.frames.lock().unwrap().push(frame);
    }

    fn request_paint(&self) {
        *self.paint_requests.lock().unwrap() += 1;
    }

    fn release(&self) {
        *self.released.lock().unwrap() = true;
    }
}

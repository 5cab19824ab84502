use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;
use crate::controllers::visualizer::ports::frame_sink::FrameSink;
use crate::core::data::texture::Texture;
use crate::input::gui::events::GuiEvent;

/// Hands frames from the visualizer loop thread to the UI thread.
///
/// Only the newest frame is kept; an unrendered older one is replaced.
pub struct PixelsAdapter {
    frame: Mutex<Option<Texture>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FrameSink for PixelsAdapter {
    fn publish(&self, frame: Texture) {
        *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
        self.wake(GuiEvent::FrameReady);
    }

    fn request_paint(&self) {
        self.wake(GuiEvent::RepaintRequested);
    }

    fn release(&self) {
        self.wake(GuiEvent::Released);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn take_frame(&self) -> Option<Texture> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    fn wake(&self, event: GuiEvent) {
        let proxy = self.event_loop_proxy.lock().unwrap_or_else(PoisonError::into_inner);

        // Fails only once the event loop is gone, when nobody is left to wake.
        if proxy.send_event(event).is_err() {
            log::debug!("event loop closed, dropping {event:?}");
        }
    }
}

//! Main GUI application loop.

use std::thread::JoinHandle;

use crossbeam::channel::{Receiver, unbounded};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::config::VisualizerConfig;
use crate::controllers::visualizer::canvas_window::CanvasWindow;
use crate::controllers::visualizer::errors::VisualizerError;
use crate::controllers::visualizer::events::VisualizerEvent;
use crate::controllers::visualizer::handle::VisualizerHandle;
use crate::controllers::visualizer::pump::EventPump;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::texture::Texture;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::translate::WindowEventTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::controllers::visualizer::state::VisualizerState;
use crate::visualizer::{ScreenReadyCallback, start_loop};

/// Opens the window and runs until it is closed or Escape is pressed.
///
/// The platform event loop runs on the calling thread and acts as the event
/// pump; the visualizer loop runs on its own thread and owns all drawing state.
pub fn run_gui(
    config: VisualizerConfig,
    textures: Receiver<Texture>,
    handle: VisualizerHandle,
    on_screen_ready: Option<ScreenReadyCallback>,
) -> Result<(), VisualizerError> {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let bounds = PixelRect::from_size(size.width, size.height);
    log::info!("window created: {}x{}", size.width, size.height);

    let mut presenter = PixelsPresenter::new(window, event_loop.create_proxy())?;

    let (events_tx, events_rx) = unbounded::<VisualizerEvent>();
    let canvas = CanvasWindow::new(presenter.share_adapter());
    let worker = start_loop(events_rx, textures, canvas, handle, on_screen_ready)?;

    let mut pump = EventPump::new(events_tx, config.debug);
    let mut translator = WindowEventTranslator::default();
    let mut worker: Option<JoinHandle<VisualizerState>> = Some(worker);
    let mut failure: Option<VisualizerError> = None;

    pump.forward(VisualizerEvent::Resize(bounds));

    event_loop.run(|event, elwt| match event {
        Event::Resumed => {
            if let Some(event) = translator.resumed() {
                pump.forward(event);
            }
        }
        Event::WindowEvent { event, window_id } if window_id == window.id() => {
            if let WindowEvent::Resized(size) = &event {
                if let Err(err) = presenter.resize_surface(size.width, size.height) {
                    log::error!("Surface resize error: {err}");
                }
            }

            if let Some(event) = translator.translate(&event) {
                pump.forward(event);
            }
        }
        Event::UserEvent(GuiEvent::RepaintRequested) => window.request_redraw(),
        Event::UserEvent(GuiEvent::FrameReady) => {
            if let Err(err) = presenter.render() {
                log::error!("Render error: {err}");
                failure = Some(err);
                elwt.exit();
            }
        }
        Event::UserEvent(GuiEvent::Released) => elwt.exit(),
        Event::LoopExiting => {
            pump.close();
            if let Some(worker) = worker.take() {
                if worker.join().is_err() {
                    log::error!("visualizer loop panicked");
                }
            }
        }
        _ => {}
    })?;

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

use std::thread::JoinHandle;

use crossbeam::channel::{Receiver, bounded};

use crate::config::VisualizerConfig;
use crate::controllers::visualizer::errors::VisualizerError;
use crate::controllers::visualizer::events::VisualizerEvent;
use crate::controllers::visualizer::handle::VisualizerHandle;
use crate::controllers::visualizer::ports::window::WindowPort;
use crate::controllers::visualizer::run_loop::spawn_run_loop;
use crate::controllers::visualizer::state::VisualizerState;
use crate::core::data::texture::Texture;

/// Called once the window exists, before any event is processed.
pub type ScreenReadyCallback = Box<dyn FnOnce(Screen) + Send>;

/// What texture producers get to work with once the window is up.
#[derive(Debug, Clone)]
pub struct Screen {
    handle: VisualizerHandle,
}

impl Screen {
    pub fn new(handle: VisualizerHandle) -> Self {
        Self { handle }
    }

    #[must_use]
    pub fn new_texture(&self, width: u32, height: u32) -> Texture {
        Texture::new(width, height)
    }

    pub fn update(&self, texture: Texture) -> Result<(), VisualizerError> {
        self.handle.update(texture)
    }

    #[must_use]
    pub fn handle(&self) -> VisualizerHandle {
        self.handle.clone()
    }
}

/// Starts the visualizer loop, then hands producers their `Screen`.
///
/// The loop is already receiving when `on_screen_ready` runs, so the callback
/// may call `update` before returning.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub(crate) fn start_loop<W>(
    events: Receiver<VisualizerEvent>,
    textures: Receiver<Texture>,
    window: W,
    handle: VisualizerHandle,
    on_screen_ready: Option<ScreenReadyCallback>,
) -> Result<JoinHandle<VisualizerState>, VisualizerError>
where
    W: WindowPort + Send + 'static,
{
    let worker = spawn_run_loop(events, textures, window)?;

    if let Some(on_screen_ready) = on_screen_ready {
        on_screen_ready(Screen::new(handle));
    }

    Ok(worker)
}

/// A single window that draws a red "T" where it was last clicked, or the
/// most recent texture it was given.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub struct Visualizer {
    config: VisualizerConfig,
    on_screen_ready: Option<ScreenReadyCallback>,
    handle: VisualizerHandle,
    textures: Receiver<Texture>,
}

impl Visualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        // Zero capacity: `update` returns only once the loop has taken the texture.
        let (textures_tx, textures) = bounded(0);

        Self {
            config,
            on_screen_ready: None,
            handle: VisualizerHandle::new(textures_tx),
            textures,
        }
    }

    #[must_use]
    pub fn with_on_screen_ready<F>(mut self, on_screen_ready: F) -> Self
    where
        F: FnOnce(Screen) + Send + 'static,
    {
        self.on_screen_ready = Some(Box::new(on_screen_ready));
        self
    }

    #[must_use]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// A handle for submitting textures from other threads.
    #[must_use]
    pub fn handle(&self) -> VisualizerHandle {
        self.handle.clone()
    }

    /// See [`VisualizerHandle::update`].
    pub fn update(&self, texture: Texture) -> Result<(), VisualizerError> {
        self.handle.update(texture)
    }

    /// Opens the window and blocks until it is closed.
    #[cfg(feature = "gui")]
    pub fn main(self) -> Result<(), VisualizerError> {
        let Self {
            config,
            on_screen_ready,
            handle,
            textures,
        } = self;

        crate::input::gui::run_gui(config, textures, handle, on_screen_ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::visualizer::test_support::{RecordingWindow, WindowCall};
    use crate::core::data::pixel_rect::PixelRect;
    use crossbeam::channel::unbounded;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_handle_feeds_visualizer_channel() {
        let visualizer = Visualizer::new(VisualizerConfig::default());
        let handle = visualizer.handle();

        let producer = thread::spawn(move || handle.update(Texture::new(5, 4)));
        let texture = visualizer
            .textures
            .recv_timeout(Duration::from_secs(2))
            .unwrap();

        assert!(producer.join().unwrap().is_ok());
        assert_eq!((texture.width(), texture.height()), (5, 4));
    }

    #[test]
    fn test_screen_creates_transparent_textures() {
        let visualizer = Visualizer::new(VisualizerConfig::default());
        let screen = Screen::new(visualizer.handle());

        let texture = screen.new_texture(8, 2);

        assert_eq!(texture.bounds(), PixelRect::from_size(8, 2));
        assert!(texture.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_on_screen_ready_may_update_before_returning() {
        let visualizer = Visualizer::new(VisualizerConfig::default());
        let handle = visualizer.handle();
        let Visualizer { textures, .. } = visualizer;
        let (events_tx, events_rx) = unbounded();
        let (result_tx, result_rx) = bounded(1);
        let window = RecordingWindow::default();

        let on_screen_ready: ScreenReadyCallback = Box::new(move |screen: Screen| {
            let texture = screen.new_texture(2, 2);
            result_tx.send(screen.update(texture)).unwrap();
        });
        let worker = start_loop(events_rx, textures, window.clone(), handle, Some(on_screen_ready))
            .unwrap();

        let result = result_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        drop(events_tx);
        let state = worker.join().unwrap();

        assert!(result.is_ok());
        assert_eq!(state.texture().map(Texture::bounds), Some(PixelRect::from_size(2, 2)));
        assert_eq!(window.calls(), vec![WindowCall::RequestPaint, WindowCall::Release]);
    }

    #[test]
    fn test_on_screen_ready_is_stored() {
        let visualizer = Visualizer::new(VisualizerConfig::default())
            .with_on_screen_ready(|_screen| {});

        assert!(visualizer.on_screen_ready.is_some());
        assert_eq!(visualizer.config().title, "Visualizer");
    }
}

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{Receiver, never, select};

use crate::controllers::visualizer::events::VisualizerEvent;
use crate::controllers::visualizer::ports::window::WindowPort;
use crate::controllers::visualizer::state::VisualizerState;
use crate::core::data::texture::Texture;

/// Runs the visualizer until the event channel closes.
///
/// Waits on both channels: events are dispatched to the state, a texture is
/// stored and followed by a paint request. When the event channel closes the
/// window is released and the final state returned.
pub fn run_loop<W: WindowPort>(
    events: Receiver<VisualizerEvent>,
    textures: Receiver<Texture>,
    mut window: W,
) -> VisualizerState {
    let mut state = VisualizerState::default();
    let closed_textures = never::<Texture>();
    let mut textures_open = true;

    loop {
        let texture_source = if textures_open { &textures } else { &closed_textures };

        select! {
            recv(events) -> event => match event {
                Ok(event) => state.handle_event(event, &mut window),
                Err(_) => break,
            },
            recv(texture_source) -> texture => match texture {
                Ok(texture) => {
                    state.set_texture(texture);
                    window.request_paint();
                }
                // Every producer handle is gone; keep serving events.
                Err(_) => textures_open = false,
            },
        }
    }

    window.release();
    log::info!("visualizer loop exited");

    state
}

/// Starts [`run_loop`] on a named worker thread.
pub fn spawn_run_loop<W>(
    events: Receiver<VisualizerEvent>,
    textures: Receiver<Texture>,
    window: W,
) -> io::Result<JoinHandle<VisualizerState>>
where
    W: WindowPort + Send + 'static,
{
    thread::Builder::new()
        .name("visualizer-loop".to_string())
        .spawn(move || run_loop(events, textures, window))
}

//! The visualizer loop: event model, state, and the ports it draws through.
//!
//! # Architecture
//!
//! - **Input**: `VisualizerEvent`s from an `EventPump`, textures from a
//!   `VisualizerHandle`
//! - **Output**: the `WindowPort` trait; `CanvasWindow` implements it over a
//!   CPU frame and a host-provided `FrameSink`
//! - **Core**: drawing actions from `core/`

pub mod canvas_window;
pub mod default_ui;
pub mod errors;
pub mod events;
pub mod handle;
pub mod ports;
pub mod pump;
pub mod run_loop;
pub mod state;
pub mod terminate;

#[cfg(test)]
pub(crate) mod test_support;

pub use canvas_window::CanvasWindow;
pub use errors::VisualizerError;
pub use handle::VisualizerHandle;
pub use run_loop::{run_loop, spawn_run_loop};
pub use state::{DEFAULT_FIGURE_POSITION, VisualizerState};

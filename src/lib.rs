mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod visualizer;

pub use crate::config::VisualizerConfig;
pub use crate::controllers::visualizer::events::{
    Direction, KeyCode, KeyEvent, LifecycleEvent, LifecycleStage, MouseButton, MouseEvent,
    VisualizerEvent,
};
pub use crate::controllers::visualizer::ports::frame_sink::FrameSink;
pub use crate::controllers::visualizer::ports::window::WindowPort;
pub use crate::controllers::visualizer::pump::{EventPump, PumpStatus};
pub use crate::controllers::visualizer::{
    CanvasWindow, DEFAULT_FIGURE_POSITION, VisualizerError, VisualizerHandle, VisualizerState,
    run_loop, spawn_run_loop,
};
pub use crate::core::actions::fill::fill_rect;
pub use crate::core::actions::scale_texture::scale_texture;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::texture::{Texture, TextureError};
pub use crate::visualizer::{Screen, ScreenReadyCallback, Visualizer};

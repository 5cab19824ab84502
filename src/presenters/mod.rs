//! Presentation adapters that put visualizer frames on screen.

#[cfg(feature = "gui")]
pub mod pixels;

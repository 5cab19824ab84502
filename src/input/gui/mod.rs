//! GUI input adapter for the visualizer.
//!
//! This module provides the windowed host using winit for window management
//! and platform events, and pixels (through the presenter) for the framebuffer.

mod app;
pub mod events;
pub mod translate;

pub use app::run_gui;

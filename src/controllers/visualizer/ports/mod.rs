//! Port definitions for the visualizer loop.
//!
//! `WindowPort` is what the loop draws through; `FrameSink` is what a host
//! toolkit implements to receive the frames a `CanvasWindow` produces.

pub mod frame_sink;
pub mod window;

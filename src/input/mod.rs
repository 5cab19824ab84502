//! Input adapters for the visualizer.
//!
//! This module contains adapters that receive platform input and translate it
//! into visualizer events.

#[cfg(feature = "gui")]
pub mod gui;

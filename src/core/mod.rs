//! Platform-independent pixel data and drawing actions.

pub mod actions;
pub mod data;

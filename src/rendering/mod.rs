//! # Rendering Module
//!
//! Plain-text rendering of the grid and session messages.

pub mod display;

pub use display::*;

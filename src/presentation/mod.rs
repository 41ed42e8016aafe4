//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the location picker screen using ratatui and maps
//! keyboard input onto application state changes.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;

//! Application layer managing screen state and the navigation hand-off.
//!
//! This module sits between the domain layer and the presentation layer:
//! it owns the picker state, decides which lookups to request and which
//! results to accept, and records where the user wants to go next.

pub mod state;
pub mod navigation;

pub use state::*;
pub use navigation::*;

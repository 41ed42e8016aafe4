//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP directory client, the background fetch
//! worker, command-line configuration, logging setup, and the navigator
//! that hands the chosen location to the next program.

pub mod config;
pub mod directory;
pub mod logging;
pub mod navigation;
pub mod worker;

pub use config::*;
pub use directory::*;
pub use logging::*;
pub use navigation::*;
pub use worker::*;

//! Coleta - Collection Point Location Picker
//!
//! A terminal screen for choosing a state and city from a geographic
//! directory service before moving on to the collection points listing.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;

//! gldemo - headless driver for the matrix demo scenes
//!
//! Loads configuration, builds the selected demo and emits the flattened
//! uniform matrices a graphics API would receive each frame.

pub mod config;
pub mod dump;

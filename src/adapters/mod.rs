//! Infrastructure adapters. Implement ports.
//!
//! Analysis endpoint clients, result rendering, terminal UI. Map errors to domain errors.

pub mod analysis;
pub mod render;
pub mod ui;

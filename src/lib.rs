//! wellness-tracker: terminal client for a remote wellness analysis service, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

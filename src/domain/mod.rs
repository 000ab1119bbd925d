//! Core domain layer. Performs no I/O.
//!
//! Entities, the hobby catalog and error types live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;

pub use catalog::HobbyCatalog;
pub use entities::{
    FieldValue, NumericField, ResultState, StoredResult, WellnessInputs, WellnessResult,
};
pub use errors::{AnalysisError, DomainError};

//! Application use cases. Orchestrate domain logic via ports.

pub mod analysis_service;
pub mod wellness_form;

pub use analysis_service::AnalysisService;
pub use wellness_form::WellnessForm;

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisError, WellnessInputs, WellnessResult};

/// Remote wellness analysis. The only integration point with the scoring service.
#[async_trait::async_trait]
pub trait AnalysisPort: Send + Sync {
    /// Send one snapshot of the form and return the scored result.
    ///
    /// One attempt per call; failures are returned, never retried.
    async fn analyze(&self, inputs: &WellnessInputs) -> Result<WellnessResult, AnalysisError>;
}

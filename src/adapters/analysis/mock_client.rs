//! Mock analysis adapter for running without a scoring service.
//!
//! Returns a fixed result after a simulated network delay. Inputs are not scored.

use crate::domain::{AnalysisError, WellnessInputs, WellnessResult};
use crate::ports::AnalysisPort;
use std::time::Duration;
use tracing::info;

/// Mock analysis client.
pub struct MockAnalysisClient {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAnalysisClient {
    /// Create a new mock client with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalysisPort for MockAnalysisClient {
    async fn analyze(&self, inputs: &WellnessInputs) -> Result<WellnessResult, AnalysisError> {
        info!(
            hobbies = inputs.hobbies.len(),
            "[MOCK] Simulating wellness analysis"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(WellnessResult {
            wellness_level: "[MOCK] Good".to_string(),
            depression_score: 2.0,
            depression_percent: 40.0,
            loneliness_score: 3.0,
            loneliness_percent: 60.0,
            recommendations: vec![
                "[MOCK] Keep a consistent sleep schedule.".to_string(),
                "[MOCK] Configure WELLNESS_API_BASE_URL to reach a real analysis service."
                    .to_string(),
            ],
            resources: vec!["https://www.meetup.com/".to_string()],
        })
    }
}

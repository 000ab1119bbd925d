//! Analysis service. Orchestrates the analyze workflow around the form state.
//!
//! Snapshot under the lock, call the analysis port without it, store on success.

use crate::domain::{
    AnalysisError, DomainError, FieldValue, NumericField, ResultState, StoredResult,
    WellnessInputs, WellnessResult,
};
use crate::ports::AnalysisPort;
use crate::usecases::WellnessForm;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Service owning one form instance and the analysis port it reports to.
///
/// Overlapping `analyze` calls are allowed; whichever response resolves last is
/// the one left in the result slot.
pub struct AnalysisService {
    analysis: Arc<dyn AnalysisPort>,
    form: Mutex<WellnessForm>,
    next_request_id: AtomicU64,
}

impl AnalysisService {
    pub fn new(analysis: Arc<dyn AnalysisPort>) -> Self {
        Self {
            analysis,
            form: Mutex::new(WellnessForm::new()),
            next_request_id: AtomicU64::new(1),
        }
    }

    /// Snapshot the form, send it, and store the result.
    ///
    /// On failure the error is logged and returned; the stored result is left as it was.
    pub async fn analyze(&self) -> Result<WellnessResult, AnalysisError> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let inputs = self.snapshot().await;
        info!(
            request_id,
            hobbies = inputs.hobbies.len(),
            "sending wellness inputs for analysis"
        );

        match self.analysis.analyze(&inputs).await {
            Ok(result) => {
                let mut form = self.form.lock().await;
                form.store_result(StoredResult {
                    result: result.clone(),
                    analyzed_at: Utc::now(),
                    request_id,
                });
                info!(
                    request_id,
                    level = %result.wellness_level,
                    recommendations = result.recommendations.len(),
                    "analysis stored"
                );
                Ok(result)
            }
            Err(e) => {
                error!(request_id, error = %e, "Error analyzing data");
                Err(e)
            }
        }
    }

    pub async fn set_field(
        &self,
        field: NumericField,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        let value = value.into();
        self.form.lock().await.set_field(field, value)?;
        debug!(field = field.wire_name(), %value, "field updated");
        Ok(())
    }

    pub async fn get_field(&self, field: NumericField) -> FieldValue {
        self.form.lock().await.get_field(field)
    }

    pub async fn toggle_hobby(&self, name: &str) -> bool {
        let selected = self.form.lock().await.toggle_hobby(name);
        debug!(hobby = name, selected, "hobby toggled");
        selected
    }

    pub async fn apply_selection<'a>(&self, chosen: impl IntoIterator<Item = &'a str>) {
        self.form.lock().await.apply_selection(chosen);
    }

    pub async fn hobbies(&self) -> Vec<String> {
        self.form.lock().await.hobbies().to_vec()
    }

    pub async fn snapshot(&self) -> WellnessInputs {
        self.form.lock().await.snapshot()
    }

    pub async fn result_state(&self) -> ResultState {
        self.form.lock().await.result_state().clone()
    }

    pub async fn reset(&self) {
        self.form.lock().await.reset();
        info!("form reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::sync::Mutex as AsyncMutex;

    fn result(level: &str) -> WellnessResult {
        WellnessResult {
            wellness_level: level.to_string(),
            depression_score: 2.0,
            depression_percent: 20.0,
            loneliness_score: 1.0,
            loneliness_percent: 10.0,
            recommendations: vec!["Sleep more".to_string()],
            resources: Vec::new(),
        }
    }

    /// Replays scripted replies in call order, each after its own delay.
    struct ScriptedPort {
        replies: AsyncMutex<Vec<(u64, Result<WellnessResult, u16>)>>,
        seen: AsyncMutex<Vec<WellnessInputs>>,
    }

    impl ScriptedPort {
        fn new(replies: Vec<(u64, Result<WellnessResult, u16>)>) -> Self {
            Self {
                replies: AsyncMutex::new(replies),
                seen: AsyncMutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl AnalysisPort for ScriptedPort {
        async fn analyze(
            &self,
            inputs: &WellnessInputs,
        ) -> Result<WellnessResult, AnalysisError> {
            self.seen.lock().await.push(inputs.clone());
            let (delay_ms, reply) = self.replies.lock().await.remove(0);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            reply.map_err(|status| AnalysisError::HttpStatus {
                status,
                body: String::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_success_is_stored() {
        let port = Arc::new(ScriptedPort::new(vec![(0, Ok(result("Good")))]));
        let service = AnalysisService::new(port.clone());
        service.toggle_hobby("Chess").await;

        let returned = service.analyze().await.unwrap();
        assert_eq!(returned, result("Good"));

        let state = service.result_state().await;
        let stored = state.stored().unwrap();
        assert_eq!(stored.result, result("Good"));
        assert_eq!(stored.request_id, 1);
        assert_eq!(port.seen.lock().await[0].hobbies, vec!["Chess".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result() {
        let port = Arc::new(ScriptedPort::new(vec![
            (0, Ok(result("Good"))),
            (0, Err(500)),
        ]));
        let service = AnalysisService::new(port);

        service.analyze().await.unwrap();
        let before = service.result_state().await;

        let err = service.analyze().await.unwrap_err();
        assert!(matches!(err, AnalysisError::HttpStatus { status: 500, .. }));
        assert_eq!(service.result_state().await, before);
    }

    #[tokio::test]
    async fn test_failure_before_any_success_stays_absent() {
        let port = Arc::new(ScriptedPort::new(vec![(0, Err(503))]));
        let service = AnalysisService::new(port);
        assert!(service.analyze().await.is_err());
        assert_eq!(service.result_state().await, ResultState::Absent);
    }

    #[tokio::test]
    async fn test_overlapping_calls_last_resolved_wins() {
        // First request resolves after the second one.
        let port = Arc::new(ScriptedPort::new(vec![
            (80, Ok(result("Slow"))),
            (5, Ok(result("Fast"))),
        ]));
        let service = Arc::new(AnalysisService::new(port));

        let first = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.analyze().await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        service.analyze().await.unwrap();
        assert_eq!(
            service.result_state().await.result().unwrap().wellness_level,
            "Fast"
        );

        first.await.unwrap().unwrap();
        let state = service.result_state().await;
        let stored = state.stored().unwrap();
        assert_eq!(stored.result.wellness_level, "Slow");
        assert_eq!(stored.request_id, 1);
    }

    #[tokio::test]
    async fn test_snapshot_taken_at_trigger_time() {
        let port = Arc::new(ScriptedPort::new(vec![(0, Ok(result("Good")))]));
        let service = AnalysisService::new(port.clone());
        service.set_field(NumericField::Age, 30_i64).await.unwrap();
        service.set_field(NumericField::Sleep, 5.5).await.unwrap();
        service.apply_selection(["Yoga", "Reading"]).await;

        service.analyze().await.unwrap();
        let sent = port.seen.lock().await[0].clone();
        assert_eq!(sent.age, 30);
        assert_eq!(sent.sleep, 5.5);
        assert_eq!(sent.hobbies, service.hobbies().await);
    }

    #[tokio::test]
    async fn test_set_field_type_error_propagates() {
        let port = Arc::new(ScriptedPort::new(Vec::new()));
        let service = AnalysisService::new(port);
        let err = service
            .set_field(NumericField::Exercise, 2.5)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FieldType { .. }));
        assert_eq!(service.get_field(NumericField::Exercise).await, FieldValue::Int(1));
    }
}

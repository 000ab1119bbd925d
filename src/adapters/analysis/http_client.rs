//! HTTP adapter for the wellness analysis endpoint.
//!
//! POSTs the form snapshot as JSON to `<base_url>/analyze` and decodes the reply
//! into `WellnessResult` without transformation.

use crate::domain::{AnalysisError, WellnessInputs, WellnessResult};
use crate::ports::AnalysisPort;
use std::time::Duration;
use tracing::{debug, warn};

/// Path of the analysis route, appended to the base URL.
const ANALYZE_PATH: &str = "/analyze";

/// Maximum number of characters of an error body kept in `AnalysisError::HttpStatus`.
const ERROR_BODY_LIMIT: usize = 200;

/// Analysis client over HTTP/JSON.
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url` (e.g. "http://127.0.0.1:5000").
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, AnalysisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(AnalysisError::Network)?;
        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
    }
}

#[async_trait::async_trait]
impl AnalysisPort for HttpAnalysisClient {
    async fn analyze(&self, inputs: &WellnessInputs) -> Result<WellnessResult, AnalysisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(inputs)
            .send()
            .await
            .map_err(AnalysisError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            warn!(status = %status, body = %body, "analysis endpoint returned error");
            return Err(AnalysisError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(AnalysisError::Network)?;
        debug!(body_len = body.len(), "received analysis response");

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body = %body.chars().take(ERROR_BODY_LIMIT).collect::<String>(), "analysis JSON parse failed");
            AnalysisError::Decode(e)
        })
    }
}

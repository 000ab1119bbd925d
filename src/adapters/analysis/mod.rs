//! Analysis adapters. Implement AnalysisPort.
//!
//! Provides the HTTP client for the remote service and a mock for offline use.

pub mod http_client;
pub mod mock_client;

pub use http_client::HttpAnalysisClient;
pub use mock_client::MockAnalysisClient;

//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wellness_tracker::adapters::analysis::{HttpAnalysisClient, MockAnalysisClient};
use wellness_tracker::adapters::ui::tui::TuiInputPort;
use wellness_tracker::domain::HobbyCatalog;
use wellness_tracker::ports::{AnalysisPort, InputPort};
use wellness_tracker::shared::config::AppConfig;
use wellness_tracker::usecases::AnalysisService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    wellness_tracker::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });

    // --- Analysis client: HTTP endpoint, or mock when WELLNESS_MOCK_ANALYSIS=true ---
    let analysis: Arc<dyn AnalysisPort> = if cfg.is_mock_analysis() {
        warn!("WELLNESS_MOCK_ANALYSIS set, using mock analysis client");
        Arc::new(MockAnalysisClient::with_delay(cfg.mock_delay_ms_or_default()))
    } else {
        let client = HttpAnalysisClient::new(&cfg.api_base_url_or_default(), cfg.request_timeout())
            .map_err(|e| anyhow::anyhow!("HTTP client setup failed: {}", e))?;
        info!(
            endpoint = %client.endpoint(),
            timeout_secs = ?cfg.request_timeout().map(|t| t.as_secs()),
            "analysis endpoint configured"
        );
        Arc::new(client)
    };

    let service = Arc::new(AnalysisService::new(analysis));
    let input_port: Arc<dyn InputPort> =
        Arc::new(TuiInputPort::new(Arc::clone(&service), HobbyCatalog::builtin()));

    // --- Run (menu -> edit / hobbies / analyze / result) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!("bye");
    Ok(())
}

use std::sync::Arc;

use adcopy_gen::{Engine, LlmProvider};
use adcopy_score::CampaignHistory;
use tokio::sync::RwLock;

use crate::config::ServiceConfig;
use crate::metrics::ApiMetrics;

/// Shared application state, cloned into every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    /// Campaign results recorded through the API, oldest first
    pub history: Arc<RwLock<CampaignHistory>>,
    pub metrics: Arc<ApiMetrics>,
    /// LLM backend, if one is wired in
    pub provider: Option<Arc<dyn LlmProvider>>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Result<Self, prometheus::Error> {
        let history = CampaignHistory::new(config.history_limit);
        Ok(Self {
            config: Arc::new(config),
            history: Arc::new(RwLock::new(history)),
            metrics: Arc::new(ApiMetrics::new()?),
            provider: None,
        })
    }

    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// The request's engine, or the configured default
    pub fn engine_for(&self, requested: Option<Engine>) -> Engine {
        requested.unwrap_or(self.config.default_engine)
    }
}

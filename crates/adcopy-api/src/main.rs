//! Binary entrypoint for the adcopy API server.
use adcopy_api::config::ServiceConfig;
use adcopy_api::run;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adcopy_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    tracing::info!(
        addr = %config.addr,
        engine = %config.default_engine,
        history_limit = config.history_limit,
        openai_key = config.openai_key_present,
        gemini_key = config.gemini_key_present,
        "loaded configuration"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

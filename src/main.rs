use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use training_duration_engine::api::{AppState, create_router};
use training_duration_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_level.to_lowercase())?)
        .init();

    let config = match env::var("RULES_DIR") {
        Ok(dir) => ConfigLoader::load(dir)?,
        Err(_) => {
            info!("RULES_DIR not set, using statutory rules");
            ConfigLoader::statutory()
        }
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(
        address = %bind_addr,
        rule_set = %config.metadata().code,
        "Listening"
    );

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}

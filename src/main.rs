mod bot;
mod config;
mod controller;
mod drivers;
mod executor;

use config::BridgeConfig;
use controller::HardwareController;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Refuse startup before any platform connection exists
    let config = BridgeConfig::from_env()?;

    info!("rescue bridge starting");
    if config.rescue_chat_id != 0 {
        info!(
            "  plain-text triggers restricted to chat {}",
            config.rescue_chat_id
        );
    } else {
        info!("  plain-text triggers unrestricted");
    }

    let controller = Arc::new(HardwareController::new(
        config.servo.clone(),
        config.camera.clone(),
    ));

    bot::run(config, controller).await
}

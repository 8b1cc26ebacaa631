// nfc-bridge-rs/nfcbridge/src/bin/bridged.rs

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nfcbridge::config::BridgeConfig;
use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::http;
use nfcbridge::session::SessionManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nfcbridge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BridgeConfig::from_env();

    let mut controller: Box<dyn TagEmulator> = if config.use_mock {
        tracing::warn!("USE_MOCK_PN532 set, no hardware will be touched");
        Box::new(MockController::new())
    } else {
        hardware_controller(&config)?
    };
    controller.initialize()?;

    let manager = SessionManager::start(controller, config.session.clone());
    let app = http::router(manager.clone());

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("NFC bridge listening on {}:{}", config.host, config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Pending sessions are dropped; an in-flight tag wait runs out first.
    let manager = Arc::clone(&manager);
    tokio::task::spawn_blocking(move || manager.shutdown()).await?;

    Ok(())
}

#[cfg(feature = "i2c")]
fn hardware_controller(config: &BridgeConfig) -> anyhow::Result<Box<dyn TagEmulator>> {
    use nfcbridge::controller::Pn532Controller;
    use nfcbridge::transport::I2cTransport;

    let transport = I2cTransport::open(config.pn532.bus, config.pn532.address)?;
    Ok(Box::new(Pn532Controller::new(
        Box::new(transport),
        config.pn532.clone(),
    )))
}

#[cfg(not(feature = "i2c"))]
fn hardware_controller(_config: &BridgeConfig) -> anyhow::Result<Box<dyn TagEmulator>> {
    anyhow::bail!(
        "built without the `i2c` feature; rebuild with --features i2c or set USE_MOCK_PN532=1"
    )
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

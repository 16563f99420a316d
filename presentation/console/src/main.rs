use dotenvy::dotenv;

mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::{console::Console, dependency_injection::DependencyContainer};

/// Console Entry Point
///
/// Initializes logging and configuration, wires the workflow to the product
/// catalogue API, and runs the interactive scan loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        base_url = %config.product_api.base_url,
        timeout_secs = config.product_api.timeout_secs,
        "Product API configured"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the scan loop until the user quits
    Console::run(container).await?;

    Ok(())
}

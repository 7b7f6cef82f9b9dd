//! Prints the current UTC time reported by a daytime server.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cadence_ext_daytime::{DaytimeClient, DaytimeConfig};
use cadence_traits::TimeSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,cadence_ext_daytime=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/daytime.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        DaytimeConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        DaytimeConfig::default()
    };

    let client = DaytimeClient::new(config)?;
    let now = client.now().await?;
    info!(host = %client.config().host, "network time received");
    println!("{}", now.to_rfc3339());

    Ok(())
}

use lead_finder::config::{load_config, Config};
use lead_finder::models::{CliApp, Result};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let loaded = load_config("config.yml").await;
    let (config, config_err) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Setup logging
    let directive = format!("lead_finder={}", config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();
    if let Some(e) = config_err {
        warn!("Failed to load config.yml: {}. Using defaults.", e);
    }

    // Create output directory
    tokio::fs::create_dir_all(&config.output.directory).await?;

    // Initialize and run CLI app
    let mut app = CliApp::new(config);

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}

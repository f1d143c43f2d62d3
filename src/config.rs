use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub defaults: SearchDefaults,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Lower bound of the simulated per-candidate latency.
    pub min_delay_ms: u64,
    /// Upper bound (exclusive) of the simulated per-candidate latency.
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

/// Initial values for the search form. The operator can override every field
/// at the prompt; location has no default because it is required input.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchDefaults {
    pub quantity: u32,
    pub min_reviews: u32,
    pub max_distance: u32,
    pub rating_threshold: f64,
    pub require_no_website: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                min_delay_ms: 200,
                max_delay_ms: 1000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
            },
            defaults: SearchDefaults {
                quantity: 10,
                min_reviews: 0,
                max_distance: 5,
                rating_threshold: 4.0,
                require_no_website: true,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

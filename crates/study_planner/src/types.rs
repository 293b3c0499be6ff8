use crate::config::PlannerConfig;
use crate::generation::{GenerationClient, GenerationConfig, GenerationError};

/// State shared by every request handler.
pub struct AppState {
    /// Client for the upstream model
    pub generator: GenerationClient,
    /// Configuration the server was started with
    pub config: PlannerConfig,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: PlannerConfig) -> Result<Self, GenerationError> {
        let generator = GenerationClient::new(GenerationConfig::from(&config))?;
        Ok(Self { generator, config })
    }
}

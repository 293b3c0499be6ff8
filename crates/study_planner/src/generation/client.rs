//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! One call per request:
//! 1. Check that an API key is configured and the description isn't blank
//! 2. POST the prompt to `models/{model}:generateContent`
//! 3. Pull the first text part out of the response envelope
//! 4. Strip code fences and parse the text as JSON

use super::error::GenerationError;
use super::output::parse_model_output;
use super::prompt::build_prompt;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::PlannerConfig;
use rand::Rng;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use url::Url;

/// User agent sent with every upstream request.
const USER_AGENT: &str = concat!("study_planner/", env!("CARGO_PKG_VERSION"));

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL for the generative language API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// API key; requests fail fast when absent
    pub api_key: Option<String>,
}

impl From<&PlannerConfig> for GenerationConfig {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

/// Client that asks the model for a weekly timetable.
pub struct GenerationClient {
    client: Client,
    config: GenerationConfig,
}

impl GenerationClient {
    /// Creates a new client.
    ///
    /// No timeouts are set; a request runs until the transport gives up.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GenerationError::Network {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    /// Asks the model for a timetable and parses its answer as JSON.
    ///
    /// # Arguments
    /// * `description` - Free-text description of what the user wants to study
    ///
    /// # Returns
    /// * `Ok(Value)` - The model's answer, parsed but not yet normalized
    /// * `Err(GenerationError)` - If configuration, input, the upstream call, or parsing fails
    pub async fn generate(&self, description: &str) -> Result<Value, GenerationError> {
        let correlation_id = generate_correlation_id();
        let start = Instant::now();

        let result = match self.generate_text(description, &correlation_id).await {
            Ok(text) => parse_model_output(&text),
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => info!(
                correlation_id = %correlation_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "Timetable generated"
            ),
            Err(e) if e.is_before_request() => warn!(
                correlation_id = %correlation_id,
                error = %e,
                "Timetable request rejected before calling the model"
            ),
            Err(e) => error!(
                correlation_id = %correlation_id,
                error = %e,
                duration_ms = start.elapsed().as_millis() as u64,
                "Timetable generation failed"
            ),
        }

        result
    }

    /// Sends the prompt and returns the model's raw text.
    async fn generate_text(
        &self,
        description: &str,
        correlation_id: &str,
    ) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        if description.trim().is_empty() {
            return Err(GenerationError::MissingInput);
        }

        let url = self.endpoint_url(api_key)?;
        let body = GenerateContentRequest::from_prompt(build_prompt(description));

        info!(
            correlation_id = %correlation_id,
            model = %self.config.model,
            description_len = description.len(),
            "Requesting timetable from model"
        );

        let response = self.client.post(url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(
                correlation_id = %correlation_id,
                status = status.as_u16(),
                body = %error_text,
                "Model request failed"
            );
            return Err(GenerationError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        debug!(correlation_id = %correlation_id, raw = %raw, "Model raw response");

        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| GenerationError::UnexpectedResponse {
                message: e.to_string(),
            })?;

        envelope
            .first_text()
            .map(str::to_string)
            .ok_or(GenerationError::NoText)
    }

    /// Builds `{base_url}/models/{model}:generateContent?key={api_key}`.
    fn endpoint_url(&self, api_key: &str) -> Result<Url, GenerationError> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        ))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

/// Generates a short id that ties together the log lines of one request.
fn generate_correlation_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFFFFFF, random)
}

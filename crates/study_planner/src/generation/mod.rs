/// Timetable generation through the Gemini API
mod client;
mod error;
mod output;
mod prompt;
mod types;

pub use client::{GenerationClient, GenerationConfig};
pub use error::GenerationError;

use crate::schedule::{self, WeeklySchedule};
use serde_json::Value;
use tracing::warn;

/// A normalized timetable plus what the model's raw answer looked like.
#[derive(Debug, Clone)]
pub struct GeneratedSchedule {
    /// All seven days, possibly empty
    pub schedule: WeeklySchedule,
    /// False when the model's answer had no keys at all
    pub source_had_keys: bool,
}

/// Asks the model for a timetable and normalizes it into a full week.
///
/// # Arguments
/// * `client` - The generation client
/// * `description` - Free-text description of the study plan
///
/// # Returns
/// * `Ok(GeneratedSchedule)` - The normalized week
/// * `Err(GenerationError)` - If the upstream call or parsing fails, or the
///   model answered with null or a bare scalar
pub async fn generate_weekly_schedule(
    client: &GenerationClient,
    description: &str,
) -> Result<GeneratedSchedule, GenerationError> {
    let raw = client.generate(description).await?;

    if !matches!(raw, Value::Object(_) | Value::Array(_)) {
        warn!("Model returned {} instead of a schedule object", json_kind(&raw));
        return Err(GenerationError::InvalidStructure);
    }

    let source_had_keys = schedule::has_own_keys(&raw);
    let kind = json_kind(&raw);
    let schedule = schedule::normalize(raw);

    if !source_had_keys {
        warn!("Model returned no schedule entries (got {})", kind);
    } else if schedule.is_empty() {
        warn!("Model returned an object without any weekday entries");
    }

    let malformed = schedule.malformed_entries();
    if malformed > 0 {
        warn!(
            malformed,
            total = schedule.total_slots(),
            "Model returned slot entries that don't match the expected shape"
        );
    }

    Ok(GeneratedSchedule {
        schedule,
        source_had_keys,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an empty object",
    }
}

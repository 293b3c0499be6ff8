//! Weekly schedule model and normalization of model output.
//!
//! The model is asked for a JSON object keyed by weekday, but nothing
//! guarantees it complies. [`normalize`] turns whatever came back into a
//! [`WeeklySchedule`] that always has all seven days.

mod types;

pub use types::*;

use serde_json::Value;

/// Coerces an arbitrary JSON value into a [`WeeklySchedule`].
///
/// For every weekday, an array under that day's key is kept as-is; a missing
/// key or any non-array value becomes an empty day. Keys that aren't weekday
/// names are dropped. Non-object input yields seven empty days.
pub fn normalize(source: Value) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::default();

    let Value::Object(mut object) = source else {
        return schedule;
    };

    for day in Weekday::ALL {
        if let Some(Value::Array(entries)) = object.remove(day.as_str()) {
            schedule.set_slots(day, entries);
        }
    }

    schedule
}

/// Returns true if `source` is an object with at least one key.
///
/// Normalization hides the difference between "the model produced nothing"
/// and "some days are empty", so check this on the source first.
pub fn has_own_keys(source: &Value) -> bool {
    source.as_object().is_some_and(|object| !object.is_empty())
}

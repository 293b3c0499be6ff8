//! Prompt construction for timetable generation.

/// Example timetable embedded in the prompt so the model copies its shape.
const EXAMPLE_SCHEDULE: &str = r#"{
  "Monday": [
    {"startTime": "9:00 AM", "endTime": "10:30 AM", "activity": "Study Math"},
    {"startTime": "11:00 AM", "endTime": "12:30 PM", "activity": "Study Physics"}
  ],
  "Tuesday": [
    {"startTime": "9:00 AM", "endTime": "10:30 AM", "activity": "Study Chemistry"},
    {"startTime": "11:00 AM", "endTime": "12:30 PM", "activity": "Study Biology"}
  ],
  "Wednesday": [
    {"startTime": "9:00 AM", "endTime": "10:30 AM", "activity": "Study Math"},
    {"startTime": "11:00 AM", "endTime": "12:30 PM", "activity": "Study Physics"}
  ],
  "Thursday": [
    {"startTime": "9:00 AM", "endTime": "10:30 AM", "activity": "Study Chemistry"},
    {"startTime": "11:00 AM", "endTime": "12:30 PM", "activity": "Study Biology"}
  ],
  "Friday": [
    {"startTime": "9:00 AM", "endTime": "10:30 AM", "activity": "Study Math"},
    {"startTime": "11:00 AM", "endTime": "12:30 PM", "activity": "Study Physics"}
  ],
  "Saturday": [
    {"startTime": "10:00 AM", "endTime": "11:30 AM", "activity": "Review Week's Material"}
  ],
  "Sunday": [
    {"startTime": "10:00 AM", "endTime": "11:30 AM", "activity": "Plan Next Week"}
  ]
}"#;

/// Builds the instruction sent to the model for `description`.
pub fn build_prompt(description: &str) -> String {
    format!(
        "You are an expert study planner. Create a one-week study timetable based on the description below.\n\
         {description}\n\
         \n\
         Return ONLY valid JSON in this exact format:\n\
         {EXAMPLE_SCHEDULE}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{normalize, Weekday};

    #[test]
    fn test_prompt_embeds_description() {
        let prompt = build_prompt("I have exams in calculus and history next month.");
        assert!(prompt.starts_with("You are an expert study planner."));
        assert!(prompt.contains("\nI have exams in calculus and history next month.\n"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_example_schedule_covers_every_day() {
        let example: serde_json::Value = serde_json::from_str(EXAMPLE_SCHEDULE).unwrap();
        let schedule = normalize(example);
        for day in Weekday::ALL {
            assert!(!schedule.slots(day).is_empty(), "{day} missing from example");
        }
        assert_eq!(schedule.malformed_entries(), 0);
    }
}

/// Types for weekly schedule data
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Day of the week, in the order the schedule is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The key used for this day in schedule JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled activity. Times are display strings, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String, // e.g., "9:00 AM"
    pub end_time: String,   // e.g., "10:30 AM"
    pub activity: String,   // e.g., "Study Math"
}

impl TimeSlot {
    /// Reads a raw schedule entry as a slot.
    ///
    /// Returns `None` unless the entry is an object with all three fields
    /// present as strings.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        TimeSlot::deserialize(entry).ok()
    }
}

/// A full week of slot entries, always holding all seven days.
///
/// Entries are kept as the JSON the model produced; use
/// [`TimeSlot::from_entry`] for a typed view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    days: [Vec<Value>; 7],
}

impl WeeklySchedule {
    /// Entries scheduled for `day`, in model order.
    pub fn slots(&self, day: Weekday) -> &[Value] {
        &self.days[day.index()]
    }

    pub(super) fn set_slots(&mut self, day: Weekday, entries: Vec<Value>) {
        self.days[day.index()] = entries;
    }

    /// Iterates over `(day, entries)` from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Value])> {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.slots(day)))
    }

    /// Total number of entries across the week.
    pub fn total_slots(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// True when no day has any entry.
    pub fn is_empty(&self) -> bool {
        self.total_slots() == 0
    }

    /// Number of entries that don't read as a [`TimeSlot`].
    pub fn malformed_entries(&self) -> usize {
        self.days
            .iter()
            .flatten()
            .filter(|entry| TimeSlot::from_entry(entry).is_none())
            .count()
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for (day, entries) in self.iter() {
            map.serialize_entry(day.as_str(), entries)?;
        }
        map.end()
    }
}

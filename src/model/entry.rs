//! Schedule entries: one class occurrence in the weekly timetable.

use jiff::civil::Time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Day;

/// One scheduled class: subject, room, day of week, and time range.
///
/// `day` is kept as the stored string rather than a [`Day`], so a value
/// that is not one of the seven day names survives a load/save round trip.
/// Such entries stay in the collection but never show up in ordered views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub subject: String,
    pub location: String,
    pub day: String,
    pub start_time: Time,
    pub end_time: Time,
}

impl ScheduleEntry {
    /// Creates an entry with a fresh random id.
    pub fn new(
        subject: impl Into<String>,
        location: impl Into<String>,
        day: Day,
        start_time: Time,
        end_time: Time,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            location: location.into(),
            day: day.name().to_string(),
            start_time,
            end_time,
        }
    }

    /// The recognized day, if `day` holds one of the seven names.
    pub fn weekday(&self) -> Option<Day> {
        Day::from_name(&self.day)
    }
}

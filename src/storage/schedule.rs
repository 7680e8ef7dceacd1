//! Schedule and meeting blobs.

use crate::model::{Meeting, ScheduleEntry};

use super::{Result, Storage};

const SCHEDULE_KEY: &str = "schedule";
const MEETINGS_KEY: &str = "meetings";

impl Storage {
    /// Loads all schedule entries. Missing or unreadable data is an empty list.
    pub(super) fn read_entries(&self) -> Result<Vec<ScheduleEntry>> {
        Ok(self.get(SCHEDULE_KEY)?.unwrap_or_default())
    }

    /// Replaces the stored schedule with `entries`.
    pub(super) fn write_entries(&self, entries: &[ScheduleEntry]) -> Result<()> {
        log::debug!("saving {} schedule entries", entries.len());
        self.put(SCHEDULE_KEY, entries)
    }

    pub(super) fn read_meetings(&self) -> Result<Vec<Meeting>> {
        Ok(self.get(MEETINGS_KEY)?.unwrap_or_default())
    }

    pub(super) fn write_meetings(&self, meetings: &[Meeting]) -> Result<()> {
        log::debug!("saving {} meetings", meetings.len());
        self.put(MEETINGS_KEY, meetings)
    }
}

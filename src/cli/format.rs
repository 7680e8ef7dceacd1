//! Output formatting for CLI display.

use jiff::civil::Time;

use crate::model::{Day, Meeting, ScheduleEntry};

use super::short_id;

/// `HH:MM`, dropping seconds.
pub(super) fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// One schedule line: time range, subject, room, short id.
pub(super) fn format_entry(entry: &ScheduleEntry) -> String {
    let mut line = format!(
        "{}-{}  {}",
        format_time(entry.start_time),
        format_time(entry.end_time),
        entry.subject
    );
    if !entry.location.is_empty() {
        line.push_str(&format!(" @ {}", entry.location));
    }
    line.push_str(&format!("  [{}]", short_id(entry.id)));
    line
}

/// A titled block of schedule lines, or a placeholder when there are none.
pub(super) fn format_section(title: &str, entries: &[&ScheduleEntry]) -> String {
    let mut out = format!("{title}\n");
    if entries.is_empty() {
        out.push_str("  No classes\n");
    }
    for entry in entries {
        out.push_str(&format!("  {}\n", format_entry(entry)));
    }
    out
}

/// Section title for a date-scoped view, e.g. `Today (Rabu, 2025-01-01)`.
pub(super) fn date_title(label: &str, day: Day, date: jiff::civil::Date) -> String {
    format!("{label} ({day}, {date})")
}

/// One meeting line: date, subject, topic, notes, short id.
pub(super) fn format_meeting(meeting: &Meeting) -> String {
    let mut line = format!("{}  {}: {}", meeting.date, meeting.subject, meeting.topic);
    if let Some(notes) = &meeting.notes {
        line.push_str(&format!(" ({notes})"));
    }
    line.push_str(&format!("  [{}]", short_id(meeting.id)));
    line
}

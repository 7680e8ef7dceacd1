//! Queries and mutations over the lecture meeting list.
//!
//! Same shape as the schedule functions: pure, over a caller-owned list.

use jiff::civil::Date;
use uuid::Uuid;

use crate::model::Meeting;

/// Appends `meeting`.
pub fn add_meeting(mut meetings: Vec<Meeting>, meeting: Meeting) -> Vec<Meeting> {
    meetings.push(meeting);
    meetings
}

/// Removes every meeting with the given id.
pub fn remove_meeting(mut meetings: Vec<Meeting>, id: Uuid) -> Vec<Meeting> {
    meetings.retain(|m| m.id != id);
    meetings
}

/// Meetings by date, oldest first. Same-date meetings keep input order.
pub fn ordered_meetings(meetings: &[Meeting]) -> Vec<&Meeting> {
    let mut ordered: Vec<&Meeting> = meetings.iter().collect();
    ordered.sort_by_key(|m| m.date);
    ordered
}

/// Meetings on or after `today`, by date.
pub fn upcoming(meetings: &[Meeting], today: Date) -> Vec<&Meeting> {
    ordered_meetings(meetings)
        .into_iter()
        .filter(|m| m.date >= today)
        .collect()
}

/// Whether `meeting` belongs to `subject`, ignoring case.
pub fn matches_subject(meeting: &Meeting, subject: &str) -> bool {
    meeting.subject.eq_ignore_ascii_case(subject.trim())
}

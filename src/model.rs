//! Core data model: days, schedule entries, meetings, and the student profile.

mod day;
mod entry;
mod meeting;
mod profile;

pub use day::Day;
pub use entry::ScheduleEntry;
pub use meeting::Meeting;
pub use profile::Profile;

//! Schedule ordering and day-window derivation.
//!
//! Every function here is pure: it is handed a snapshot of the entry
//! collection and returns a new view or a new collection. Nothing is cached
//! between calls, and nothing here touches storage.
//!
//! Ordering is a stable sort on two keys:
//!
//! 1. the entry's day, by position in the Monday-first canonical order;
//! 2. the start time, compared by hour and minute only.
//!
//! Entries whose `day` is not one of the seven day names are dropped from
//! every view. They stay in the raw collection, so `update_entry` and
//! `remove_entry` still see them.

use jiff::civil::Date;

use crate::clock::Clock;
use crate::model::{Day, ScheduleEntry};

/// All recognized entries in canonical display order.
pub fn ordered_view(entries: &[ScheduleEntry]) -> Vec<&ScheduleEntry> {
    let mut keyed: Vec<(Day, &ScheduleEntry)> = entries
        .iter()
        .filter_map(|entry| entry.weekday().map(|day| (day, entry)))
        .collect();
    // `sort_by_key` is stable: same day and clock time keep input order.
    keyed.sort_by_key(|(day, entry)| {
        (
            day.index(),
            entry.start_time.hour(),
            entry.start_time.minute(),
        )
    });
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// The days that have at least one recognized entry, Monday first.
pub fn days_present(entries: &[ScheduleEntry]) -> Vec<Day> {
    Day::ALL
        .into_iter()
        .filter(|day| entries.iter().any(|e| e.weekday() == Some(*day)))
        .collect()
}

/// Ordered entries paired with their day, one group per non-empty day.
pub fn group_by_day(entries: &[ScheduleEntry]) -> Vec<(Day, Vec<&ScheduleEntry>)> {
    let ordered = ordered_view(entries);
    days_present(entries)
        .into_iter()
        .map(|day| {
            let group = ordered
                .iter()
                .copied()
                .filter(|e| e.weekday() == Some(day))
                .collect();
            (day, group)
        })
        .collect()
}

/// Ordered entries falling on the weekday of `date`.
pub fn entries_for_date(entries: &[ScheduleEntry], date: Date) -> Vec<&ScheduleEntry> {
    let day = Day::from_weekday(date.weekday());
    entries_for_day(entries, day)
}

/// Ordered entries for a single day.
pub fn entries_for_day(entries: &[ScheduleEntry], day: Day) -> Vec<&ScheduleEntry> {
    ordered_view(entries)
        .into_iter()
        .filter(|e| e.day == day.name())
        .collect()
}

/// Entries for the clock's current date.
pub fn todays_entries<'a>(
    entries: &'a [ScheduleEntry],
    clock: &dyn Clock,
) -> Vec<&'a ScheduleEntry> {
    entries_for_date(entries, clock.now().date())
}

/// Entries for the calendar day after the clock's current date.
///
/// Uses calendar-date addition, so month and year boundaries roll over
/// correctly. Past the last representable date the view is empty.
pub fn tomorrows_entries<'a>(
    entries: &'a [ScheduleEntry],
    clock: &dyn Clock,
) -> Vec<&'a ScheduleEntry> {
    let today = clock.now().date();
    match today.tomorrow() {
        Ok(tomorrow) => entries_for_date(entries, tomorrow),
        Err(e) => {
            log::warn!("no calendar day after {today}: {e}");
            Vec::new()
        }
    }
}

/// Appends `entry`. The caller is responsible for the id being unique.
pub fn add_entry(mut entries: Vec<ScheduleEntry>, entry: ScheduleEntry) -> Vec<ScheduleEntry> {
    entries.push(entry);
    entries
}

/// Replaces the first entry with the same id as `updated`.
///
/// With no matching id the collection comes back unchanged.
pub fn update_entry(
    mut entries: Vec<ScheduleEntry>,
    updated: ScheduleEntry,
) -> Vec<ScheduleEntry> {
    if let Some(slot) = entries.iter_mut().find(|e| e.id == updated.id) {
        *slot = updated;
    }
    entries
}

/// Removes every entry with the same id as `target`, keeping the rest in order.
pub fn remove_entry(
    mut entries: Vec<ScheduleEntry>,
    target: &ScheduleEntry,
) -> Vec<ScheduleEntry> {
    entries.retain(|e| e.id != target.id);
    entries
}

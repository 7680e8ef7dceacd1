//! Schedule mutations: add, edit, remove.
//!
//! Each command loads the whole collection, applies one pure mutation, and
//! saves the result back. Saving is the command's job, never the engine's.

use jiff::civil::Time;

use crate::catalog;
use crate::model::{Day, ScheduleEntry};
use crate::schedule;
use crate::storage::Store;

use super::format::format_entry;
use super::{resolve_id, short_id};

/// Field overrides for `edit`. `None` keeps the current value.
#[derive(Debug, Default)]
pub(super) struct EntryChanges {
    pub subject: Option<String>,
    pub location: Option<String>,
    pub day: Option<Day>,
    pub start: Option<Time>,
    pub end: Option<Time>,
}

impl EntryChanges {
    fn apply(self, mut entry: ScheduleEntry) -> ScheduleEntry {
        if let Some(subject) = self.subject {
            entry.subject = subject.trim().to_string();
        }
        if let Some(location) = self.location {
            entry.location = location.trim().to_string();
        }
        if let Some(day) = self.day {
            entry.day = day.name().to_string();
        }
        if let Some(start) = self.start {
            entry.start_time = start;
        }
        if let Some(end) = self.end {
            entry.end_time = end;
        }
        entry
    }
}

pub(super) fn cmd_add(
    store: &impl Store,
    subject: &str,
    location: &str,
    day: Day,
    start: Time,
    end: Time,
) -> Result<String, String> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    note_if_not_offered(store, subject);

    let entries = load(store)?;
    let entry = ScheduleEntry::new(subject, location.trim(), day, start, end);
    let id = entry.id;
    log::info!("adding {subject} on {day}");
    let entries = schedule::add_entry(entries, entry);
    save(store, &entries)?;

    Ok(format!("{id}\n"))
}

pub(super) fn cmd_edit(
    store: &impl Store,
    reference: &str,
    changes: EntryChanges,
) -> Result<String, String> {
    let entries = load(store)?;
    let current = resolve_id(&entries, reference, |e| e.id, "entry")?.clone();

    if let Some(subject) = &changes.subject {
        if subject.trim().is_empty() {
            return Err("subject must not be empty".to_string());
        }
        note_if_not_offered(store, subject);
    }

    let updated = changes.apply(current);
    let line = format_entry(&updated);
    log::info!("updating entry {}", updated.id);
    let entries = schedule::update_entry(entries, updated);
    save(store, &entries)?;

    Ok(format!("Updated: {line}\n"))
}

pub(super) fn cmd_remove(store: &impl Store, reference: &str) -> Result<String, String> {
    let entries = load(store)?;
    let target = resolve_id(&entries, reference, |e| e.id, "entry")?.clone();

    log::info!("removing entry {}", target.id);
    let entries = schedule::remove_entry(entries, &target);
    save(store, &entries)?;

    Ok(format!(
        "Removed {} ({})\n",
        target.subject,
        short_id(target.id)
    ))
}

fn load(store: &impl Store) -> Result<Vec<ScheduleEntry>, String> {
    store
        .load_entries()
        .map_err(|e| format!("failed to load schedule: {e}"))
}

fn save(store: &impl Store, entries: &[ScheduleEntry]) -> Result<(), String> {
    store
        .save_entries(entries)
        .map_err(|e| format!("failed to save schedule: {e}"))
}

/// Subjects outside the profile's program are allowed; just note it.
fn note_if_not_offered(store: &impl Store, subject: &str) {
    match store.load_profile() {
        Ok(Some(profile)) if !catalog::offers(profile.program, subject.trim()) => {
            log::debug!("'{subject}' is not a listed {} subject", profile.program);
        }
        Ok(_) => {}
        Err(e) => log::debug!("could not load profile to check '{subject}': {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::time;

    use crate::catalog::Program;
    use crate::cli::tests::storage;
    use crate::model::Profile;

    fn add(store: &impl Store, subject: &str, day: Day, hour: i8) -> String {
        let out = cmd_add(
            store,
            subject,
            "R.101",
            day,
            time(hour, 0, 0, 0),
            time(hour + 1, 40, 0, 0),
        )
        .unwrap();
        out.trim().to_string()
    }

    #[test]
    fn add_persists_and_prints_id() {
        let store = storage();

        let id = add(&store, "Basis Data", Day::Rabu, 13);

        let entries = store.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.to_string(), id);
        assert_eq!(entries[0].day, "Rabu");
    }

    #[test]
    fn add_rejects_blank_subject() {
        let store = storage();
        let err = cmd_add(
            &store,
            "  ",
            "",
            Day::Senin,
            time(8, 0, 0, 0),
            time(9, 0, 0, 0),
        )
        .unwrap_err();

        assert!(err.contains("subject"));
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn add_does_not_validate_time_order() {
        let store = storage();

        cmd_add(
            &store,
            "Kalkulus",
            "",
            Day::Senin,
            time(10, 0, 0, 0),
            time(8, 0, 0, 0),
        )
        .unwrap();

        assert_eq!(store.load_entries().unwrap().len(), 1);
    }

    #[test]
    fn edit_changes_only_given_fields() {
        let store = storage();
        let id = add(&store, "Basis Data", Day::Rabu, 13);

        let changes = EntryChanges {
            day: Some(Day::Kamis),
            start: Some(time(7, 30, 0, 0)),
            ..EntryChanges::default()
        };
        cmd_edit(&store, &id[..6], changes).unwrap();

        let entry = &store.load_entries().unwrap()[0];
        assert_eq!(entry.day, "Kamis");
        assert_eq!(entry.start_time, time(7, 30, 0, 0));
        assert_eq!(entry.subject, "Basis Data");
        assert_eq!(entry.end_time, time(14, 40, 0, 0));
    }

    #[test]
    fn edit_unknown_id_fails_without_saving() {
        let store = storage();
        add(&store, "Basis Data", Day::Rabu, 13);
        let before = store.load_entries().unwrap();

        let err = cmd_edit(&store, "zzzz", EntryChanges::default()).unwrap_err();

        assert!(err.contains("no entry matching"));
        assert_eq!(store.load_entries().unwrap(), before);
    }

    #[test]
    fn remove_keeps_the_others_in_order() {
        let store = storage();
        let first = add(&store, "Basis Data", Day::Rabu, 13);
        let second = add(&store, "Struktur Data", Day::Senin, 8);
        let third = add(&store, "Kalkulus", Day::Jumat, 10);

        let out = cmd_remove(&store, &second).unwrap();

        assert!(out.contains("Struktur Data"));
        let ids: Vec<String> = store
            .load_entries()
            .unwrap()
            .iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, [first, third]);
    }

    #[test]
    fn edit_trims_subject_and_location() {
        let store = storage();
        let id = add(&store, "Basis Data", Day::Rabu, 13);

        let changes = EntryChanges {
            subject: Some("  Kalkulus  ".into()),
            location: Some(" Lab 2 ".into()),
            ..EntryChanges::default()
        };
        cmd_edit(&store, &id, changes).unwrap();

        let entry = &store.load_entries().unwrap()[0];
        assert_eq!(entry.subject, "Kalkulus");
        assert_eq!(entry.location, "Lab 2");
    }

    #[test]
    fn duplicated_ids_can_be_edited_and_removed() {
        let store = storage();
        let twin = ScheduleEntry::new(
            "Basis Data",
            "R.101",
            Day::Rabu,
            time(13, 0, 0, 0),
            time(14, 40, 0, 0),
        );
        let other = ScheduleEntry::new(
            "Kalkulus",
            "R.102",
            Day::Senin,
            time(8, 0, 0, 0),
            time(9, 40, 0, 0),
        );
        store
            .save_entries(&[twin.clone(), other.clone(), twin.clone()])
            .unwrap();

        let changes = EntryChanges {
            location: Some("Lab 2".into()),
            ..EntryChanges::default()
        };
        cmd_edit(&store, &twin.id.to_string(), changes).unwrap();

        let entries = store.load_entries().unwrap();
        assert_eq!(entries[0].location, "Lab 2");
        assert_eq!(entries[2].location, "R.101");

        cmd_remove(&store, &twin.id.to_string()[..8]).unwrap();

        assert_eq!(store.load_entries().unwrap(), vec![other]);
    }

    #[test]
    fn subject_outside_the_program_is_still_added() {
        let store = storage();
        let profile = Profile::new("Dewi", Program::Informatics, 3).unwrap();
        store.save_profile(&profile).unwrap();

        add(&store, "Sejarah Seni", Day::Kamis, 9);

        assert_eq!(store.load_entries().unwrap()[0].subject, "Sejarah Seni");
    }
}

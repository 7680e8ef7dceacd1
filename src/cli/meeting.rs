//! Lecture meeting commands.

use clap::Subcommand;
use jiff::civil::Date;
use uuid::Uuid;

use crate::clock::Clock;
use crate::meetings;
use crate::model::Meeting;
use crate::storage::Store;

use super::format::format_meeting;
use super::{resolve_id, short_id};

#[derive(Debug, Subcommand)]
pub enum MeetingCommand {
    /// Record a meeting. Prints the new meeting's id.
    Add {
        #[arg(long)]
        subject: String,

        /// What the meeting covers.
        #[arg(long)]
        topic: String,

        /// Date as YYYY-MM-DD.
        #[arg(long)]
        date: Date,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List meetings by date.
    List {
        /// Only meetings from today on.
        #[arg(long)]
        upcoming: bool,

        /// Only meetings for this subject.
        #[arg(long)]
        subject: Option<String>,
    },

    /// Remove a meeting.
    Remove {
        /// Meeting id: full UUID or unambiguous prefix.
        id: String,
    },
}

pub(super) fn run(
    command: MeetingCommand,
    store: &impl Store,
    clock: &dyn Clock,
) -> Result<String, String> {
    match command {
        MeetingCommand::Add {
            subject,
            topic,
            date,
            notes,
        } => cmd_add(store, &subject, &topic, date, notes),
        MeetingCommand::List { upcoming, subject } => {
            let today = upcoming.then(|| clock.now().date());
            cmd_list(store, today, subject.as_deref())
        }
        MeetingCommand::Remove { id } => cmd_remove(store, &id),
    }
}

fn cmd_add(
    store: &impl Store,
    subject: &str,
    topic: &str,
    date: Date,
    notes: Option<String>,
) -> Result<String, String> {
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("subject must not be empty".to_string());
    }

    let meeting = Meeting {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        topic: topic.trim().to_string(),
        date,
        notes: notes.filter(|n| !n.trim().is_empty()),
    };
    let id = meeting.id;

    let list = meetings::add_meeting(load(store)?, meeting);
    save(store, &list)?;

    Ok(format!("{id}\n"))
}

/// `since` limits the list to meetings on or after that date.
fn cmd_list(
    store: &impl Store,
    since: Option<Date>,
    subject: Option<&str>,
) -> Result<String, String> {
    let list = load(store)?;
    let mut view = match since {
        Some(since) => meetings::upcoming(&list, since),
        None => meetings::ordered_meetings(&list),
    };
    if let Some(subject) = subject {
        view.retain(|m| meetings::matches_subject(m, subject));
    }

    if view.is_empty() {
        return Ok("No meetings\n".to_string());
    }
    Ok(view
        .iter()
        .map(|m| format!("{}\n", format_meeting(m)))
        .collect())
}

fn cmd_remove(store: &impl Store, reference: &str) -> Result<String, String> {
    let list = load(store)?;
    let target = resolve_id(&list, reference, |m| m.id, "meeting")?;
    let (id, topic) = (target.id, target.topic.clone());

    let list = meetings::remove_meeting(list, id);
    save(store, &list)?;

    Ok(format!("Removed {topic} ({})\n", short_id(id)))
}

fn load(store: &impl Store) -> Result<Vec<Meeting>, String> {
    store
        .load_meetings()
        .map_err(|e| format!("failed to load meetings: {e}"))
}

fn save(store: &impl Store, list: &[Meeting]) -> Result<(), String> {
    store
        .save_meetings(list)
        .map_err(|e| format!("failed to save meetings: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::cli::tests::{clock_on, storage};

    #[test]
    fn add_then_list_in_date_order() {
        let store = storage();
        cmd_add(&store, "Basis Data", "SQL", date(2025, 3, 17), None).unwrap();
        cmd_add(&store, "Basis Data", "ERD", date(2025, 3, 3), Some("Kuis".into())).unwrap();

        let out = cmd_list(&store, None, None).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2025-03-03  Basis Data: ERD (Kuis)"));
        assert!(lines[1].starts_with("2025-03-17  Basis Data: SQL"));
    }

    #[test]
    fn blank_notes_are_dropped() {
        let store = storage();
        cmd_add(&store, "Basis Data", "ERD", date(2025, 3, 3), Some("  ".into())).unwrap();

        assert_eq!(store.load_meetings().unwrap()[0].notes, None);
    }

    #[test]
    fn list_upcoming_uses_the_clock() {
        let store = storage();
        cmd_add(&store, "Basis Data", "ERD", date(2025, 3, 3), None).unwrap();
        cmd_add(&store, "Basis Data", "SQL", date(2025, 3, 17), None).unwrap();

        let command = MeetingCommand::List {
            upcoming: true,
            subject: None,
        };
        let out = run(command, &store, &clock_on(date(2025, 3, 10))).unwrap();

        assert!(!out.contains("ERD"));
        assert!(out.contains("SQL"));
    }

    #[test]
    fn list_by_subject() {
        let store = storage();
        cmd_add(&store, "Basis Data", "ERD", date(2025, 3, 3), None).unwrap();
        cmd_add(&store, "Struktur Data", "Stack", date(2025, 3, 4), None).unwrap();

        let out = cmd_list(&store, None, Some("struktur data")).unwrap();

        assert!(out.contains("Stack"));
        assert!(!out.contains("ERD"));
    }

    #[test]
    fn remove_by_prefix() {
        let store = storage();
        let id = cmd_add(&store, "Basis Data", "ERD", date(2025, 3, 3), None).unwrap();

        let out = cmd_remove(&store, &id.trim()[..8]).unwrap();

        assert!(out.starts_with("Removed ERD"));
        assert_eq!(cmd_list(&store, None, None).unwrap(), "No meetings\n");
    }
}

//! CLI interface for Jadwal.
//!
//! Each subcommand is non-interactive: arguments in, text out.
//!
//! - `jadwal profile set|show|reset` and `jadwal subjects`: onboarding.
//! - `jadwal add|edit|remove`: change the weekly schedule.
//! - `jadwal list|today|tomorrow|on`: read it back, in display order.
//! - `jadwal meeting add|list|remove`: lecture meeting records.
//!
//! Entry and meeting ids take a full UUID or an unambiguous prefix.

mod entry;
mod format;
mod meeting;
mod profile;
mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::{Date, Time};

use crate::clock::Clock;
use crate::model::Day;
use crate::storage::Store;

pub use meeting::MeetingCommand;
pub use profile::ProfileCommand;

/// Jadwal: your weekly class schedule.
#[derive(Debug, Parser)]
#[command(name = "jadwal", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Database file to use instead of the configured one.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Getting started
  1. jadwal profile set --name "Dewi Lestari" --program informatics --semester 3
  2. jadwal subjects
  3. jadwal add --subject "Struktur Data" --location "Lab 3" --day kamis --start 07:30 --end 09:10
  4. jadwal today

Days are Senin, Selasa, Rabu, Kamis, Jumat, Sabtu, Minggu (any case,
English names work too). Times are 24-hour HH:MM."#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set up or inspect the student profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// List the subjects offered by the profile's program.
    Subjects,

    /// Add a class to the weekly schedule. Prints the new entry's id.
    Add {
        #[arg(long)]
        subject: String,

        /// Room or building.
        #[arg(long, default_value = "")]
        location: String,

        #[arg(long)]
        day: Day,

        /// Start time, HH:MM.
        #[arg(long, value_parser = parse_time)]
        start: Time,

        /// End time, HH:MM.
        #[arg(long, value_parser = parse_time)]
        end: Time,
    },

    /// Change fields of an existing class. Unset fields are kept.
    Edit {
        /// Entry id: full UUID or unambiguous prefix.
        id: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        day: Option<Day>,

        #[arg(long, value_parser = parse_time)]
        start: Option<Time>,

        #[arg(long, value_parser = parse_time)]
        end: Option<Time>,
    },

    /// Remove a class from the schedule.
    Remove {
        /// Entry id: full UUID or unambiguous prefix.
        id: String,
    },

    /// Show the whole week, one section per day with classes.
    List,

    /// Show today's classes.
    Today,

    /// Show tomorrow's classes.
    Tomorrow,

    /// Show the classes that fall on a given date.
    On {
        /// Date as YYYY-MM-DD.
        date: Date,
    },

    /// Record and browse lecture meetings.
    Meeting {
        #[command(subcommand)]
        command: MeetingCommand,
    },
}

/// Run a parsed command against a store, returning the text to print.
pub fn run(command: Command, store: &impl Store, clock: &dyn Clock) -> Result<String, String> {
    match command {
        Command::Profile { command } => profile::run(command, store),
        Command::Subjects => profile::cmd_subjects(store),
        Command::Add {
            subject,
            location,
            day,
            start,
            end,
        } => entry::cmd_add(store, &subject, &location, day, start, end),
        Command::Edit {
            id,
            subject,
            location,
            day,
            start,
            end,
        } => entry::cmd_edit(
            store,
            &id,
            entry::EntryChanges {
                subject,
                location,
                day,
                start,
                end,
            },
        ),
        Command::Remove { id } => entry::cmd_remove(store, &id),
        Command::List => view::cmd_list(store),
        Command::Today => view::cmd_today(store, clock),
        Command::Tomorrow => view::cmd_tomorrow(store, clock),
        Command::On { date } => view::cmd_on(store, date),
        Command::Meeting { command } => meeting::run(command, store, clock),
    }
}

/// Parse a 24-hour `HH:MM` time.
fn parse_time(s: &str) -> Result<Time, String> {
    let invalid = || format!("invalid time '{s}' (expected HH:MM)");
    let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hour: i8 = hour.parse().map_err(|_| invalid())?;
    let minute: i8 = minute.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Resolve an id reference (full UUID or unambiguous prefix) among `items`.
fn resolve_id<'a, T>(
    items: &'a [T],
    reference: &str,
    id_of: impl Fn(&T) -> uuid::Uuid,
    noun: &str,
) -> Result<&'a T, String> {
    let reference = reference.trim().to_lowercase();
    if reference.is_empty() {
        return Err(format!("empty {noun} id"));
    }

    // A full UUID matches exactly; anything else is a prefix.
    let matches: Vec<&T> = match reference.parse::<uuid::Uuid>() {
        Ok(id) => items.iter().filter(|item| id_of(*item) == id).collect(),
        Err(_) => items
            .iter()
            .filter(|item| id_of(*item).to_string().starts_with(&reference))
            .collect(),
    };

    // Duplicate ids are allowed; only distinct ids make a reference ambiguous.
    let mut distinct: Vec<uuid::Uuid> = Vec::new();
    for item in &matches {
        let id = id_of(*item);
        if !distinct.contains(&id) {
            distinct.push(id);
        }
    }

    match (matches.first(), distinct.as_slice()) {
        (None, _) => Err(format!("no {noun} matching '{reference}'")),
        (Some(first), [_]) => Ok(*first),
        (Some(_), many) => {
            let ids: Vec<String> = many.iter().map(|id| short_id(*id)).collect();
            Err(format!(
                "'{reference}' is ambiguous: matches {} ids: {}",
                many.len(),
                ids.join(", ")
            ))
        }
    }
}

/// First eight hex digits of an id, for display.
fn short_id(id: uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

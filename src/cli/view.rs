//! Read-only schedule views: the whole week, and single dates.

use jiff::civil::Date;

use crate::clock::Clock;
use crate::model::{Day, ScheduleEntry};
use crate::schedule;
use crate::storage::Store;

use super::format::{date_title, format_section};

pub(super) fn cmd_list(store: &impl Store) -> Result<String, String> {
    let entries = load(store)?;
    let groups = schedule::group_by_day(&entries);

    let mut out = String::new();
    if groups.is_empty() {
        out.push_str("No classes scheduled\n");
        let onboarded = store
            .is_onboarded()
            .map_err(|e| format!("failed to load profile: {e}"))?;
        if !onboarded {
            out.push_str("New here? Start with `jadwal profile set`.\n");
        }
    }
    for (day, group) in &groups {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format_section(day.name(), group));
    }

    let hidden = entries.iter().filter(|e| e.weekday().is_none()).count();
    if hidden > 0 {
        log::debug!("{hidden} entries have an unrecognized day");
        out.push_str(&format!(
            "\n{hidden} entr{} with an unrecognized day not shown\n",
            if hidden == 1 { "y" } else { "ies" }
        ));
    }

    Ok(out)
}

pub(super) fn cmd_today(store: &impl Store, clock: &dyn Clock) -> Result<String, String> {
    let entries = load(store)?;
    // One reading of the clock for both the title and the view.
    let now = clock.now();
    let today = now.date();
    let view = schedule::todays_entries(&entries, &now);
    Ok(render_date("Today", today, &view))
}

pub(super) fn cmd_tomorrow(store: &impl Store, clock: &dyn Clock) -> Result<String, String> {
    let entries = load(store)?;
    let now = clock.now();
    let tomorrow = now
        .date()
        .tomorrow()
        .map_err(|e| format!("no calendar day after {}: {e}", now.date()))?;
    let view = schedule::tomorrows_entries(&entries, &now);
    Ok(render_date("Tomorrow", tomorrow, &view))
}

pub(super) fn cmd_on(store: &impl Store, date: Date) -> Result<String, String> {
    let entries = load(store)?;
    let view = schedule::entries_for_date(&entries, date);
    Ok(render_date("On", date, &view))
}

fn render_date(label: &str, date: Date, view: &[&ScheduleEntry]) -> String {
    let title = date_title(label, Day::from_weekday(date.weekday()), date);
    format_section(&title, view)
}

fn load(store: &impl Store) -> Result<Vec<ScheduleEntry>, String> {
    store
        .load_entries()
        .map_err(|e| format!("failed to load schedule: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::{date, time};

    use crate::catalog::Program;
    use crate::cli::tests::{clock_on, storage};
    use crate::model::Profile;

    fn seed(store: &impl Store, rows: &[(&str, &str, i8)]) -> Vec<ScheduleEntry> {
        let entries: Vec<ScheduleEntry> = rows
            .iter()
            .map(|(subject, day, hour)| ScheduleEntry {
                id: uuid::Uuid::new_v4(),
                subject: (*subject).to_string(),
                location: String::new(),
                day: (*day).to_string(),
                start_time: time(*hour, 0, 0, 0),
                end_time: time(*hour + 1, 0, 0, 0),
            })
            .collect();
        store.save_entries(&entries).unwrap();
        entries
    }

    #[test]
    fn list_sections_only_days_with_classes() {
        let store = storage();
        seed(
            &store,
            &[
                ("Basis Data", "Rabu", 9),
                ("Kalkulus", "Senin", 8),
                ("Fisika", "Senin", 7),
                ("Struktur Data", "Jumat", 10),
            ],
        );

        let out = cmd_list(&store).unwrap();

        let headers: Vec<&str> = out
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with(' '))
            .collect();
        assert_eq!(headers, ["Senin", "Rabu", "Jumat"]);
        let fisika = out.find("Fisika").unwrap();
        let kalkulus = out.find("Kalkulus").unwrap();
        assert!(fisika < kalkulus);
    }

    #[test]
    fn list_counts_unrecognized_days() {
        let store = storage();
        seed(&store, &[("Kalkulus", "Senin", 8), ("Hantu", "NotADay", 9)]);

        let out = cmd_list(&store).unwrap();

        assert!(!out.contains("Hantu"));
        assert!(out.contains("1 entry with an unrecognized day not shown"));
    }

    #[test]
    fn list_empty_schedule_before_onboarding() {
        let store = storage();
        assert_eq!(
            cmd_list(&store).unwrap(),
            "No classes scheduled\nNew here? Start with `jadwal profile set`.\n"
        );
    }

    #[test]
    fn list_empty_schedule_after_onboarding() {
        let store = storage();
        let profile = Profile::new("Dewi", Program::Accounting, 1).unwrap();
        store.save_profile(&profile).unwrap();

        assert_eq!(cmd_list(&store).unwrap(), "No classes scheduled\n");
    }

    #[test]
    fn today_on_a_wednesday() {
        let store = storage();
        seed(
            &store,
            &[
                ("Basis Data", "Rabu", 13),
                ("Kalkulus", "Kamis", 8),
                ("Fisika", "Rabu", 8),
            ],
        );

        let out = cmd_today(&store, &clock_on(date(2025, 1, 1))).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Today (Rabu, 2025-01-01)");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Fisika"));
        assert!(lines[2].contains("Basis Data"));
    }

    #[test]
    fn tomorrow_after_month_end() {
        let store = storage();
        seed(&store, &[("Kalkulus", "Senin", 8), ("Fisika", "Selasa", 8)]);

        let out = cmd_tomorrow(&store, &clock_on(date(2025, 3, 31))).unwrap();

        assert!(out.starts_with("Tomorrow (Selasa, 2025-04-01)\n"));
        assert!(out.contains("Fisika"));
        assert!(!out.contains("Kalkulus"));
    }

    #[test]
    fn on_a_free_day() {
        let store = storage();
        seed(&store, &[("Kalkulus", "Senin", 8)]);

        // 2025-01-05 is a Sunday.
        let out = cmd_on(&store, date(2025, 1, 5)).unwrap();

        assert_eq!(out, "On (Minggu, 2025-01-05)\n  No classes\n");
    }
}

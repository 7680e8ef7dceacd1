//! Day names: the seven-day week as the schedule names it.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// A day of the week, named the way schedule entries store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

/// Day names indexed by calendar weekday, Sunday first.
///
/// Position `n - 1` holds the day for the 1-based Sunday-first weekday `n`.
pub const SUNDAY_FIRST: [Day; 7] = [
    Day::Minggu,
    Day::Senin,
    Day::Selasa,
    Day::Rabu,
    Day::Kamis,
    Day::Jumat,
    Day::Sabtu,
];

impl Day {
    /// Canonical display order: Monday first.
    pub const ALL: [Self; 7] = [
        Self::Senin,
        Self::Selasa,
        Self::Rabu,
        Self::Kamis,
        Self::Jumat,
        Self::Sabtu,
        Self::Minggu,
    ];

    /// The literal name stored in a schedule entry's `day` field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Senin => "Senin",
            Self::Selasa => "Selasa",
            Self::Rabu => "Rabu",
            Self::Kamis => "Kamis",
            Self::Jumat => "Jumat",
            Self::Sabtu => "Sabtu",
            Self::Minggu => "Minggu",
        }
    }

    /// Position in the canonical order (`Senin` = 0 … `Minggu` = 6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Recognizes one of the seven literal names, exactly.
    ///
    /// Anything else, including a differently-cased name, is not a day.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Resolves a calendar weekday through the Sunday-first table.
    pub fn from_weekday(weekday: Weekday) -> Self {
        SUNDAY_FIRST[usize::from(weekday.to_sunday_zero_offset().unsigned_abs())]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient parsing for user input: any casing, Indonesian or English names.
impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let english = match wanted.as_str() {
            "monday" | "mon" => Some(Self::Senin),
            "tuesday" | "tue" => Some(Self::Selasa),
            "wednesday" | "wed" => Some(Self::Rabu),
            "thursday" | "thu" => Some(Self::Kamis),
            "friday" | "fri" => Some(Self::Jumat),
            "saturday" | "sat" => Some(Self::Sabtu),
            "sunday" | "sun" => Some(Self::Minggu),
            _ => None,
        };
        english
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|d| d.name().to_lowercase() == wanted)
            })
            .ok_or_else(|| format!("unknown day '{s}' (expected one of Senin..Minggu)"))
    }
}

//! Student profile: the onboarding record.

use serde::{Deserialize, Serialize};

use crate::catalog::Program;

/// Highest semester accepted for a profile.
pub const MAX_SEMESTER: u8 = 14;

/// Who the schedule belongs to. Present once onboarding is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub program: Program,
    pub semester: u8,
}

impl Profile {
    /// Builds a profile, rejecting a blank name or an out-of-range semester.
    pub fn new(name: &str, program: Program, semester: u8) -> Result<Self, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !(1..=MAX_SEMESTER).contains(&semester) {
            return Err(format!(
                "semester must be between 1 and {MAX_SEMESTER}, got {semester}"
            ));
        }
        Ok(Self {
            name: name.to_string(),
            program,
            semester,
        })
    }
}

//! Onboarding commands: the student profile and its derived subjects.

use clap::Subcommand;

use crate::catalog::{self, Program};
use crate::model::Profile;
use crate::storage::Store;

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Create or replace the profile. Completes onboarding.
    Set {
        #[arg(long)]
        name: String,

        #[arg(long, value_enum)]
        program: Program,

        #[arg(long)]
        semester: u8,
    },

    /// Show the current profile.
    Show,

    /// Forget the profile and start onboarding over.
    /// The schedule itself is kept.
    Reset,
}

pub(super) fn run(command: ProfileCommand, store: &impl Store) -> Result<String, String> {
    match command {
        ProfileCommand::Set {
            name,
            program,
            semester,
        } => cmd_set(store, &name, program, semester),
        ProfileCommand::Show => cmd_show(store),
        ProfileCommand::Reset => cmd_reset(store),
    }
}

fn cmd_set(
    store: &impl Store,
    name: &str,
    program: Program,
    semester: u8,
) -> Result<String, String> {
    let profile = Profile::new(name, program, semester)?;
    store
        .save_profile(&profile)
        .map_err(|e| format!("failed to save profile: {e}"))?;
    log::info!("onboarded {} ({program})", profile.name);
    Ok(format!(
        "Welcome, {}! {} subjects are available for {program}.\n",
        profile.name,
        catalog::subjects_for(program).len()
    ))
}

fn cmd_show(store: &impl Store) -> Result<String, String> {
    let profile = require_profile(store)?;
    Ok(format!(
        "Name:     {}\nProgram:  {}\nSemester: {}\n",
        profile.name, profile.program, profile.semester
    ))
}

fn cmd_reset(store: &impl Store) -> Result<String, String> {
    store
        .clear_profile()
        .map_err(|e| format!("failed to clear profile: {e}"))?;
    Ok("Profile cleared\n".to_string())
}

pub(super) fn cmd_subjects(store: &impl Store) -> Result<String, String> {
    let profile = require_profile(store)?;
    let mut out = format!("{}\n", profile.program);
    for subject in catalog::subjects_for(profile.program) {
        out.push_str(&format!("  {subject}\n"));
    }
    Ok(out)
}

fn require_profile(store: &impl Store) -> Result<Profile, String> {
    store
        .load_profile()
        .map_err(|e| format!("failed to load profile: {e}"))?
        .ok_or_else(|| "no profile yet: run `jadwal profile set` first".to_string())
}

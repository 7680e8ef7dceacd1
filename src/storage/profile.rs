//! Profile blob: the onboarding record.

use crate::model::Profile;

use super::{Result, Storage};

const PROFILE_KEY: &str = "profile";

impl Storage {
    pub(super) fn read_profile(&self) -> Result<Option<Profile>> {
        self.get(PROFILE_KEY)
    }

    pub(super) fn write_profile(&self, profile: &Profile) -> Result<()> {
        log::debug!("saving profile for {}", profile.name);
        self.put(PROFILE_KEY, profile)
    }

    /// Idempotent: clearing with no profile stored is fine.
    pub(super) fn delete_profile(&self) -> Result<()> {
        self.delete(PROFILE_KEY)
    }
}

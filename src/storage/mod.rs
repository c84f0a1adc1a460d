//! Persistence collaborator for the user profile.
//!
//! The profile travels as one opaque serialized blob. Callers treat load
//! failures as "no profile" and save failures as logged-only conditions, so
//! none of these errors reach the presentation layer.

use crate::error::AppResult;
use crate::models::UserProfile;

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Loads and saves the single user profile blob
#[cfg_attr(test, mockall::automock)]
pub trait ProfileStore {
    /// Returns the saved profile, or `None` if nothing was ever saved
    fn load(&self) -> AppResult<Option<UserProfile>>;

    /// Replaces the saved profile
    fn save(&self, profile: &UserProfile) -> AppResult<()>;
}

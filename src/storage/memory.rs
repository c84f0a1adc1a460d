use std::cell::RefCell;

use crate::error::AppResult;
use crate::models::UserProfile;

use super::ProfileStore;

/// In-memory store for tests and ephemeral runs
///
/// Interior mutability keeps the `ProfileStore` contract (`save` takes
/// `&self`); the core is single-threaded so a `RefCell` is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<UserProfile>>,
}

impl MemoryStore {
    /// The last saved profile, if any
    pub fn saved(&self) -> Option<UserProfile> {
        self.slot.borrow().clone()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> AppResult<Option<UserProfile>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, profile: &UserProfile) -> AppResult<()> {
        *self.slot.borrow_mut() = Some(profile.clone());
        Ok(())
    }
}

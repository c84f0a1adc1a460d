use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::AppResult;
use crate::models::UserProfile;

use super::ProfileStore;

/// Stores the profile as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> AppResult<Option<UserProfile>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(serde_json::from_str(&blob)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, profile: &UserProfile) -> AppResult<()> {
        let blob = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemId};

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));

        let mut profile = UserProfile::sample();
        profile.like(&ItemId::new("m3"));
        profile.dislike(&ItemId::new("p5"));

        store.save(&profile).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));

        store.save(&UserProfile::new()).unwrap();

        let mut profile = UserProfile::new();
        profile.add_preference(Category::Book, "thriller");
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.prefers(Category::Book, "thriller"));
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_err());
    }
}

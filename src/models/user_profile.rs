use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, ItemId};

/// The single user's taste profile
///
/// Preference terms are stored lowercase so matching against item
/// genres/categories stays case-insensitive. The liked and disliked sets are
/// mutually exclusive: an id lives in at most one of them at any time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Preferred genre/category terms per content category
    #[serde(default)]
    pub preferences: HashMap<Category, HashSet<String>>,
    #[serde(default)]
    pub liked: HashSet<ItemId>,
    #[serde(default)]
    pub disliked: HashSet<ItemId>,
    /// Stamped on every mutation; carried in the persisted blob
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl UserProfile {
    /// Creates an empty profile
    pub fn new() -> Self {
        Self {
            preferences: HashMap::new(),
            liked: HashSet::new(),
            disliked: HashSet::new(),
            updated_at: Utc::now(),
        }
    }

    /// The demo user's starting taste, used when no saved profile exists
    pub fn sample() -> Self {
        let mut profile = Self::new();
        for term in ["action", "drama", "sci-fi"] {
            profile.add_preference(Category::Movie, term);
        }
        for term in ["fiction", "thriller", "biography"] {
            profile.add_preference(Category::Book, term);
        }
        for term in ["electronics", "fashion", "books"] {
            profile.add_preference(Category::Product, term);
        }
        profile
    }

    /// Whether `term` is a preferred genre/category for `category`
    ///
    /// A category with no recorded preferences behaves as an empty set.
    pub fn prefers(&self, category: Category, term: &str) -> bool {
        self.preferences
            .get(&category)
            .map(|terms| terms.contains(&term.to_lowercase()))
            .unwrap_or(false)
    }

    /// Records a preferred genre/category term
    pub fn add_preference(&mut self, category: Category, term: &str) {
        self.preferences
            .entry(category)
            .or_default()
            .insert(term.to_lowercase());
        self.updated_at = Utc::now();
    }

    /// Marks an item as liked, clearing any earlier dislike
    ///
    /// Idempotent: liking an already-liked item changes nothing.
    pub fn like(&mut self, id: &ItemId) {
        self.liked.insert(id.clone());
        self.disliked.remove(id);
        self.updated_at = Utc::now();
    }

    /// Marks an item as disliked, clearing any earlier like
    pub fn dislike(&mut self, id: &ItemId) {
        self.disliked.insert(id.clone());
        self.liked.remove(id);
        self.updated_at = Utc::now();
    }
}

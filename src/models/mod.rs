use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod item;
mod user_profile;

pub use item::{Item, ItemKind};
pub use user_profile::UserProfile;

/// Identifier for a catalog item (e.g. "m1", "b3", "p6")
///
/// Ids are globally unique across all categories, which is what makes
/// cross-category lookup possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Content category of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Book,
    Product,
}

impl Category {
    /// All categories, in the fixed order the aggregator walks them
    pub const ALL: [Category; 3] = [Category::Movie, Category::Book, Category::Product];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Movie => "movie",
            Category::Book => "book",
            Category::Product => "product",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" => Ok(Category::Movie),
            "book" | "books" => Ok(Category::Book),
            "product" | "products" => Ok(Category::Product),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// An item paired with its relevance score
///
/// Scores are derived values recomputed on every ranking request and are
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub item: Item,
    pub score: f64,
}

use serde::{Deserialize, Serialize};

use super::{Category, ItemId};

/// A catalog entry: a movie, book, or product
///
/// Items are immutable once created; the catalog is loaded at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Average rating in `[0, 5]`
    pub rating: f64,
    /// Popularity in `[0, 100]`
    pub popularity: f64,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Category-specific display fields
///
/// The source data is duck-typed: movies carry a subtitle and genre, books an
/// author and category, products a brand and category. The variant makes that
/// shape explicit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Movie {
        subtitle: Option<String>,
        genre: Option<String>,
    },
    Book {
        author: Option<String>,
        category: Option<String>,
    },
    Product {
        brand: Option<String>,
        category: Option<String>,
    },
}

impl Item {
    /// Creates a movie entry
    #[allow(clippy::too_many_arguments)]
    pub fn movie(
        id: &str,
        title: &str,
        subtitle: &str,
        genre: &str,
        rating: f64,
        popularity: f64,
        description: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.to_string(),
            rating,
            popularity,
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: ItemKind::Movie {
                subtitle: Some(subtitle.to_string()),
                genre: Some(genre.to_string()),
            },
        }
    }

    /// Creates a book entry
    #[allow(clippy::too_many_arguments)]
    pub fn book(
        id: &str,
        title: &str,
        author: &str,
        category: &str,
        rating: f64,
        popularity: f64,
        description: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.to_string(),
            rating,
            popularity,
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: ItemKind::Book {
                author: Some(author.to_string()),
                category: Some(category.to_string()),
            },
        }
    }

    /// Creates a product entry
    #[allow(clippy::too_many_arguments)]
    pub fn product(
        id: &str,
        title: &str,
        brand: &str,
        category: &str,
        rating: f64,
        popularity: f64,
        description: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            id: ItemId::new(id),
            title: title.to_string(),
            rating,
            popularity,
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            kind: ItemKind::Product {
                brand: Some(brand.to_string()),
                category: Some(category.to_string()),
            },
        }
    }

    /// The content category this item belongs to
    pub fn category(&self) -> Category {
        match self.kind {
            ItemKind::Movie { .. } => Category::Movie,
            ItemKind::Book { .. } => Category::Book,
            ItemKind::Product { .. } => Category::Product,
        }
    }

    /// The genre/category label used for content-based scoring
    pub fn genre_or_category(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Movie { genre, .. } => genre.as_deref(),
            ItemKind::Book { category, .. } => category.as_deref(),
            ItemKind::Product { category, .. } => category.as_deref(),
        }
    }

    /// The secondary display line: subtitle, author, or brand
    pub fn subtitle_text(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Movie { subtitle, .. } => subtitle.as_deref(),
            ItemKind::Book { author, .. } => author.as_deref(),
            ItemKind::Product { brand, .. } => brand.as_deref(),
        }
    }
}

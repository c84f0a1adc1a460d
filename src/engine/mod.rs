//! Recommendation engine: scoring, ranking, aggregation, and the
//! [`RecommendationEngine`] facade the presentation layer talks to.

use rand::Rng;

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::{Category, ItemId, ScoredItem, UserProfile};
use crate::storage::ProfileStore;

mod aggregator;
mod ranker;
mod scoring;

pub use aggregator::{aggregate, FEED_SIZE, PER_CATEGORY_TAKE};
pub use ranker::{rank, CATEGORY_RANK_LIMIT};
pub use scoring::{
    base_score, score, CONTENT_MATCH_BONUS, GOOD_RATING_BONUS, HIGH_RATING_BONUS, POPULARITY_CAP,
};

/// Predicate over the cached feed: optional category plus optional
/// case-insensitive substring match on title and subtitle text
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub category: Option<Category>,
    pub query: Option<String>,
}

impl FeedFilter {
    pub fn matches(&self, entry: &ScoredItem) -> bool {
        if let Some(category) = self.category {
            if entry.item.category() != category {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let title_hit = entry.item.title.to_lowercase().contains(&query);
            let subtitle_hit = entry
                .item
                .subtitle_text()
                .map(|text| text.to_lowercase().contains(&query))
                .unwrap_or(false);
            if !title_hit && !subtitle_hit {
                return false;
            }
        }

        true
    }
}

/// The engine owns the catalog, the single user's profile, the injected
/// random source, and the persistence collaborator
///
/// All operations run to completion synchronously. The profile is saved after
/// every mutation; a failed save is logged and otherwise ignored, so no core
/// operation fails on persistence problems.
pub struct RecommendationEngine<R: Rng, S: ProfileStore> {
    catalog: Catalog,
    profile: UserProfile,
    rng: R,
    store: S,
    last_feed: Vec<ScoredItem>,
}

impl<R: Rng, S: ProfileStore> RecommendationEngine<R, S> {
    pub fn new(catalog: Catalog, profile: UserProfile, rng: R, store: S) -> Self {
        Self {
            catalog,
            profile,
            rng,
            store,
            last_feed: Vec::new(),
        }
    }

    /// Constructs the engine from whatever the store holds
    ///
    /// A missing or unreadable profile degrades to an empty one; load
    /// failures are logged, never surfaced.
    pub fn from_store(catalog: Catalog, rng: R, store: S) -> Self {
        let profile = match store.load() {
            Ok(Some(profile)) => profile,
            Ok(None) => UserProfile::default(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load user profile, starting fresh");
                UserProfile::default()
            }
        };
        Self::new(catalog, profile, rng, store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Recomputes the cross-category feed and caches it as the most recent
    /// recommendation set
    pub fn refresh_feed(&mut self) -> &[ScoredItem] {
        self.last_feed = aggregate(&self.catalog, &self.profile, &mut self.rng);
        &self.last_feed
    }

    /// The most recently computed feed (empty before the first refresh)
    pub fn last_feed(&self) -> &[ScoredItem] {
        &self.last_feed
    }

    /// Filters the cached feed without recomputing any scores
    pub fn filter_feed(&self, filter: &FeedFilter) -> Vec<ScoredItem> {
        self.last_feed
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect()
    }

    /// Ranked listing of a single category
    pub fn section(&mut self, category: Category) -> Vec<ScoredItem> {
        rank(
            self.catalog.items(category),
            &self.profile,
            CATEGORY_RANK_LIMIT,
            &mut self.rng,
        )
    }

    /// Likes an item, replacing any earlier dislike
    ///
    /// Unknown ids are rejected with `NotFound` rather than silently
    /// recorded.
    pub fn like(&mut self, id: &ItemId) -> AppResult<()> {
        self.ensure_known(id)?;
        self.profile.like(id);
        self.persist();
        Ok(())
    }

    /// Dislikes an item, replacing any earlier like
    pub fn dislike(&mut self, id: &ItemId) -> AppResult<()> {
        self.ensure_known(id)?;
        self.profile.dislike(id);
        self.persist();
        Ok(())
    }

    /// Records a preferred genre/category term for one category
    pub fn add_preference(&mut self, category: Category, term: &str) {
        self.profile.add_preference(category, term);
        self.persist();
    }

    fn ensure_known(&self, id: &ItemId) -> AppResult<()> {
        self.catalog
            .find_by_id(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("unknown item id: {}", id)))
    }

    /// Saves the profile, logging failures without surfacing them
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.profile) {
            tracing::error!(error = %e, "Failed to save user profile");
        }
    }
}

//! Content recommendation engine for a single-user demo catalog of movies,
//! books, and products.
//!
//! The core pipeline: [`Catalog`] feeds the scoring engine, which computes a
//! per-item relevance score from the [`UserProfile`]; the ranker sorts and
//! truncates; the aggregator merges per-category winners into one shuffled
//! cross-category feed. The [`RecommendationEngine`] facade ties these
//! together with an injected random source and a [`ProfileStore`]
//! persistence collaborator.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use engine::{FeedFilter, RecommendationEngine};
pub use error::{AppError, AppResult};
pub use models::{Category, Item, ItemId, ItemKind, ScoredItem, UserProfile};
pub use storage::{JsonFileStore, MemoryStore, ProfileStore};

use rand::Rng;

use crate::models::{Item, UserProfile};

/// Bonus for an item whose genre/category matches a user preference
pub const CONTENT_MATCH_BONUS: f64 = 3.0;
/// Bonus for a rating of 4.5 or above
pub const HIGH_RATING_BONUS: f64 = 2.0;
/// Bonus for a rating of 4.0 or above
pub const GOOD_RATING_BONUS: f64 = 1.0;
/// Cap on the popularity contribution
pub const POPULARITY_CAP: f64 = 2.0;

/// The deterministic part of an item's relevance score
///
/// Weighted sum of three static factors: content match against the user's
/// preference set for the item's category (case-insensitive), a stepped
/// quality bonus from the rating, and a capped popularity contribution.
/// Missing preference categories score as an empty set; this never fails.
pub fn base_score(item: &Item, profile: &UserProfile) -> f64 {
    let mut score = 0.0;

    if let Some(term) = item.genre_or_category() {
        if profile.prefers(item.category(), term) {
            score += CONTENT_MATCH_BONUS;
        }
    }

    if item.rating >= 4.5 {
        score += HIGH_RATING_BONUS;
    } else if item.rating >= 4.0 {
        score += GOOD_RATING_BONUS;
    }

    score += (item.popularity / 100.0).min(POPULARITY_CAP);

    score
}

/// Full relevance score: base score plus one uniform draw from `[0, 1)`
///
/// The jitter is intentional: re-scoring the same item twice may yield
/// different values, which is what keeps repeated recommendation requests
/// varied. Pass a seeded generator to make it reproducible.
pub fn score<R: Rng>(item: &Item, profile: &UserProfile, rng: &mut R) -> f64 {
    base_score(item, profile) + rng.gen::<f64>()
}

use std::cmp::Ordering;

use rand::Rng;

use crate::models::{Item, ScoredItem, UserProfile};

use super::scoring::score;

/// How deep a single-category listing ranks
pub const CATEGORY_RANK_LIMIT: usize = 12;

/// Scores and ranks a slice of items, descending by score
///
/// The sort is stable, so equal scores keep their catalog order; variety
/// between calls comes from the scoring jitter, not from a tie-break rule.
/// Output length is `min(limit, items.len())`. Inputs are untouched.
pub fn rank<R: Rng>(
    items: &[Item],
    profile: &UserProfile,
    limit: usize,
    rng: &mut R,
) -> Vec<ScoredItem> {
    let mut scored: Vec<ScoredItem> = items
        .iter()
        .map(|item| ScoredItem {
            item: item.clone(),
            score: score(item, profile, rng),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

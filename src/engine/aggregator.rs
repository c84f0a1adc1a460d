use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::models::{Category, ScoredItem, UserProfile};

use super::ranker::rank;

/// Maximum size of the cross-category feed
pub const FEED_SIZE: usize = 8;
/// How many top items each category contributes before the shuffle
pub const PER_CATEGORY_TAKE: usize = 4;

/// Builds the cross-category recommendation feed
///
/// Ranks each category, takes its top four, concatenates the picks in fixed
/// category order, shuffles them (Fisher-Yates), and truncates to eight.
/// Output size is `min(8, total collected)`; ids stay unique because catalog
/// ids are unique across categories.
pub fn aggregate<R: Rng>(
    catalog: &Catalog,
    profile: &UserProfile,
    rng: &mut R,
) -> Vec<ScoredItem> {
    let mut feed: Vec<ScoredItem> = Vec::new();
    for category in Category::ALL {
        feed.extend(rank(catalog.items(category), profile, PER_CATEGORY_TAKE, rng));
    }

    feed.shuffle(rng);
    feed.truncate(FEED_SIZE);
    feed
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::{Item, ItemId};

    #[test]
    fn test_feed_size_with_full_catalog() {
        // 6+6+6 catalog: each category contributes 4, the feed keeps 8 of
        // the 12 pre-selected.
        let catalog = Catalog::builtin();
        let profile = UserProfile::sample();
        let mut rng = StdRng::seed_from_u64(1);

        let feed = aggregate(&catalog, &profile, &mut rng);
        assert_eq!(feed.len(), FEED_SIZE);
    }

    #[test]
    fn test_feed_has_no_duplicate_ids() {
        let catalog = Catalog::builtin();
        let profile = UserProfile::sample();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let feed = aggregate(&catalog, &profile, &mut rng);
            let ids: HashSet<&ItemId> = feed.iter().map(|e| &e.item.id).collect();
            assert_eq!(ids.len(), feed.len());
        }
    }

    #[test]
    fn test_feed_items_come_from_catalog() {
        let catalog = Catalog::builtin();
        let profile = UserProfile::sample();
        let mut rng = StdRng::seed_from_u64(3);

        let feed = aggregate(&catalog, &profile, &mut rng);
        for entry in &feed {
            let original = catalog.find_by_id(&entry.item.id).unwrap();
            assert_eq!(original, &entry.item);
        }
    }

    #[test]
    fn test_small_input_is_a_permutation() {
        // With two items per category only 6 are collected; nothing may be
        // lost to the shuffle.
        let items = vec![
            Item::movie("m1", "A", "s", "Drama", 4.0, 50.0, "d", &[]),
            Item::movie("m2", "B", "s", "Drama", 4.1, 60.0, "d", &[]),
            Item::book("b1", "C", "a", "Fiction", 4.2, 70.0, "d", &[]),
            Item::book("b2", "D", "a", "Fiction", 4.3, 80.0, "d", &[]),
            Item::product("p1", "E", "x", "Home", 4.4, 90.0, "d", &[]),
            Item::product("p2", "F", "x", "Home", 4.5, 95.0, "d", &[]),
        ];
        let catalog = Catalog::new(items).unwrap();
        let profile = UserProfile::new();
        let mut rng = StdRng::seed_from_u64(5);

        let feed = aggregate(&catalog, &profile, &mut rng);
        let ids: HashSet<&str> = feed.iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(feed.len(), 6);
        assert_eq!(ids, ["m1", "m2", "b1", "b2", "p1", "p2"].into_iter().collect());
    }

    #[test]
    fn test_category_membership_preserved() {
        let catalog = Catalog::builtin();
        let profile = UserProfile::sample();
        let mut rng = StdRng::seed_from_u64(9);

        let feed = aggregate(&catalog, &profile, &mut rng);
        for entry in &feed {
            // the id prefix encodes the seed category
            let expected = match entry.item.id.as_str().chars().next().unwrap() {
                'm' => Category::Movie,
                'b' => Category::Book,
                'p' => Category::Product,
                _ => unreachable!(),
            };
            assert_eq!(entry.item.category(), expected);
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_feed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let profile = UserProfile::new();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(aggregate(&catalog, &profile, &mut rng).is_empty());
    }
}

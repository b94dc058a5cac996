//! Query space generation and traversal order
//!
//! Produces every (tag, index) logical query and shuffles the work set so
//! neighbouring indices of the same tag are not requested back to back.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::LogicalQuery;

/// Generate one logical query per (tag, index) pair
///
/// Covers the full cartesian product of `tags` and
/// `start_index..=end_index`. Repeated tags are generated once, at their
/// first position. An inverted range yields nothing.
///
/// # Example
/// ```
/// use tagsweep_core::generate_queries;
/// let queries = generate_queries(&["dsc"], 1, 2);
/// let phrases: Vec<String> = queries.iter().map(|q| q.phrase()).collect();
/// assert_eq!(phrases, vec!["dsc 0001", "dsc 0002"]);
/// ```
pub fn generate_queries<S: AsRef<str>>(
    tags: &[S],
    start_index: u32,
    end_index: u32,
) -> Vec<LogicalQuery> {
    if end_index < start_index {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| seen.insert(AsRef::<str>::as_ref(*tag)))
        .flat_map(|tag| {
            (start_index..=end_index).map(move |index| LogicalQuery::new(tag.as_ref(), index))
        })
        .collect()
}

/// Return a random permutation of `items`
///
/// The caller supplies the generator so runs can be made reproducible
/// with a seeded RNG.
pub fn shuffle_work<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_single_tag() {
        let queries = generate_queries(&["dsc"], 1, 2);
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].rendered_text, "\"dsc 0001\"");
        assert_eq!(queries[1].rendered_text, "\"dsc 0002\"");
    }

    #[test]
    fn test_generate_inverted_range_is_empty() {
        let queries = generate_queries(&["dsc", "img"], 10, 3);
        assert!(queries.is_empty());
    }

    #[test]
    fn test_generate_no_tags_is_empty() {
        let tags: [&str; 0] = [];
        assert!(generate_queries(&tags, 1, 10).is_empty());
    }

    #[test]
    fn test_generate_repeated_tag_once() {
        let queries = generate_queries(&["dsc", "img", "dsc"], 1, 1);
        let rendered: Vec<&str> = queries.iter().map(|q| q.identity()).collect();
        assert_eq!(rendered, vec!["\"dsc 0001\"", "\"img 0001\""]);
    }

    #[test]
    fn test_generate_single_index() {
        let queries = generate_queries(&["mvi"], 9999, 9999);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].phrase(), "mvi 9999");
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let items: Vec<u32> = (0..100).collect();
        let a = shuffle_work(items.clone(), &mut StdRng::seed_from_u64(7));
        let b = shuffle_work(items, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_generate_covers_cartesian_product(
            tags in prop::collection::hash_set("[a-z]{1,5}", 1..5),
            start in 0u32..200,
            span in 0u32..50,
        ) {
            let tags: Vec<String> = tags.into_iter().collect();
            let end = start + span;
            let queries = generate_queries(&tags, start, end);

            prop_assert_eq!(queries.len(), tags.len() * (span as usize + 1));

            let pairs: HashSet<(String, u32)> =
                queries.iter().map(|q| (q.tag.clone(), q.index)).collect();
            prop_assert_eq!(pairs.len(), queries.len());
            prop_assert!(queries.iter().all(|q| q.index >= start && q.index <= end));
        }

        #[test]
        fn prop_shuffle_is_permutation(items in prop::collection::vec(any::<u16>(), 0..200), seed in any::<u64>()) {
            let mut shuffled = shuffle_work(items.clone(), &mut StdRng::seed_from_u64(seed));
            let mut original = items;
            shuffled.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(shuffled, original);
        }
    }
}

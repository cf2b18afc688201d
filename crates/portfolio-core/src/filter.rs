//! Filter Engine
//!
//! Stable filter of catalog items by active category and search text.

use crate::catalog::{Item, ALL_CATEGORY};

/// True when `active` is the `all` sentinel or names the item's category
pub fn matches_category(item: &Item, active: &str) -> bool {
    active == ALL_CATEGORY || item.category_id == active
}

/// Case-insensitive substring match against the title or any tag.
///
/// `needle` must already be lower-cased.
fn matches_needle(item: &Item, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// True when `query` is empty or appears in the title or a tag, ignoring case
pub fn matches_query(item: &Item, query: &str) -> bool {
    matches_needle(item, &query.to_lowercase())
}

/// Items passing both predicates, in their original order
pub fn filter_items(items: &[Item], active: &str, query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_category(item, active) && matches_needle(item, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rstest::rstest;

    fn sample_items() -> Vec<Item> {
        Catalog::sample().unwrap().items().to_vec()
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_all_with_empty_query_keeps_everything_in_order() {
        let items = sample_items();
        let filtered = filter_items(&items, "all", "");
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_neon_cityscape_scenario() {
        let items = sample_items();

        let by_tag = filter_items(&items, "all", "neon");
        assert!(by_tag.iter().any(|i| i.title == "Neon Cityscape"));

        let wrong_category = filter_items(&items, "drawing", "neon");
        assert!(wrong_category.iter().all(|i| i.title != "Neon Cityscape"));
        assert!(wrong_category.is_empty());
    }

    #[rstest]
    #[case("fox")]
    #[case("FOX")]
    #[case("Fox")]
    #[case("fOx")]
    fn test_query_ignores_case(#[case] query: &str) {
        let items = sample_items();
        assert_eq!(ids(&filter_items(&items, "all", query)), vec![1]);
    }

    #[rstest]
    #[case("all", "nature", vec![1, 6])]
    #[case("generative", "nature", vec![6])]
    #[case("blockbench", "", vec![1, 5])]
    #[case("vector", "LOGO", vec![4])]
    #[case("drawing", "sk", vec![3])]
    #[case("all", "zzz", vec![])]
    #[case("sculpture", "", vec![])]
    fn test_category_and_query_combine(
        #[case] category: &str,
        #[case] query: &str,
        #[case] expected: Vec<u32>,
    ) {
        let items = sample_items();
        assert_eq!(ids(&filter_items(&items, category, query)), expected);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let items = sample_items();
        for category in ["all", "blockbench", "generative", "drawing", "vector"] {
            for query in ["", "e", "o", "code", "A"] {
                let filtered = filter_items(&items, category, query);
                let mut source = items.iter();
                for kept in &filtered {
                    assert!(source.any(|i| i == kept), "{category}/{query} broke order");
                    assert!(matches_category(kept, category));
                    assert!(matches_query(kept, query));
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample_items();
        let once = filter_items(&items, "generative", "a");
        let twice = filter_items(&once, "generative", "a");
        assert_eq!(once, twice);
        assert_eq!(once, filter_items(&items, "generative", "a"));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let items = sample_items();
        // "Low Poly Fox" and friends contain spaces, tags never do
        let spaced = filter_items(&items, "all", " ");
        assert_eq!(spaced.len(), 8);
        assert!(filter_items(&items, "all", " fox ").is_empty());
    }

    #[test]
    fn test_unknown_category_on_item_never_panics() {
        let mut items = sample_items();
        items[0].category_id = "missing".to_string();
        assert!(filter_items(&items, "blockbench", "").iter().all(|i| i.id != 1));
        assert!(filter_items(&items, "all", "fox").iter().any(|i| i.id == 1));
    }
}

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use log::debug;

use crate::content::ContentItem;
use crate::utils::slug::slugify;

/// A tag aggregated across all collections
#[derive(Debug, Clone)]
pub struct Tag {
    /// Display name, the first-seen casing of the tag string
    pub name: String,

    /// Slugified name, the aggregation key
    pub slug: String,

    /// Items carrying this tag, in collection-then-item order. Shared
    /// allocations: an item tagged N times is stored once, not N times.
    pub items: Vec<Arc<ContentItem>>,

    /// Number of distinct items carrying this tag
    pub count: usize,
}

/// Aggregate tags across all collections.
///
/// Tag strings are matched case-insensitively by their slug; the first-seen
/// casing becomes the display name. Duplicate tag strings on a single item
/// count once. Tags with no items are never materialized.
///
/// The collection map is ordered, so accumulation order (and with it the
/// default tag page ordering) is independent of how collections were loaded.
pub fn aggregate_tags(collections: &BTreeMap<String, Vec<ContentItem>>) -> BTreeMap<String, Tag> {
    let mut tags: BTreeMap<String, Tag> = BTreeMap::new();

    for items in collections.values() {
        for item in items {
            let mut seen_on_item = HashSet::new();
            let mut shared: Option<Arc<ContentItem>> = None;

            for raw in &item.tags {
                let slug = slugify(raw);
                if slug.is_empty() || !seen_on_item.insert(slug.clone()) {
                    continue;
                }

                let tag = tags.entry(slug.clone()).or_insert_with(|| Tag {
                    name: raw.clone(),
                    slug,
                    items: Vec::new(),
                    count: 0,
                });

                if tag.name != *raw {
                    debug!("Tag casing \"{}\" merged into \"{}\"", raw, tag.name);
                }

                // One copy per item however many tags it carries
                let shared = shared.get_or_insert_with(|| Arc::new(item.clone()));
                tag.items.push(Arc::clone(shared));
                tag.count += 1;
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::content::build_item;

    fn item_with_tags(name: &str, tags: &str) -> ContentItem {
        let content = format!("---\ntags: [{}]\n---\nbody", tags);
        build_item(Path::new(&format!("{}.md", name)), &content).unwrap()
    }

    #[test]
    fn test_case_insensitive_merge_keeps_first_casing() {
        let mut collections = BTreeMap::new();
        collections.insert(
            "posts".to_string(),
            vec![item_with_tags("a", "Rust"), item_with_tags("b", "rust")],
        );

        let tags = aggregate_tags(&collections);

        assert_eq!(tags.len(), 1);
        let tag = &tags["rust"];
        assert_eq!(tag.name, "Rust");
        assert_eq!(tag.count, 2);
    }

    #[test]
    fn test_duplicate_tags_on_one_item_count_once() {
        let mut collections = BTreeMap::new();
        collections.insert(
            "posts".to_string(),
            vec![item_with_tags("a", "Go, go, GO")],
        );

        let tags = aggregate_tags(&collections);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags["go"].count, 1);
        assert_eq!(tags["go"].items.len(), 1);
    }

    #[test]
    fn test_aggregation_spans_collections_in_name_order() {
        let mut collections = BTreeMap::new();
        collections.insert("posts".to_string(), vec![item_with_tags("p", "shared")]);
        collections.insert("notes".to_string(), vec![item_with_tags("n", "shared")]);

        let tags = aggregate_tags(&collections);
        let slugs: Vec<&str> = tags["shared"].items.iter().map(|i| i.slug.as_str()).collect();

        // BTreeMap iterates "notes" before "posts"
        assert_eq!(slugs, vec!["n", "p"]);
        assert_eq!(tags["shared"].count, 2);
    }

    #[test]
    fn test_multi_tagged_item_is_stored_once() {
        let mut collections = BTreeMap::new();
        collections.insert(
            "posts".to_string(),
            vec![item_with_tags("a", "alpha, beta")],
        );

        let tags = aggregate_tags(&collections);

        assert!(Arc::ptr_eq(&tags["alpha"].items[0], &tags["beta"].items[0]));
    }

    #[test]
    fn test_untagged_items_materialize_nothing() {
        let mut collections = BTreeMap::new();
        collections.insert(
            "posts".to_string(),
            vec![build_item(Path::new("a.md"), "no tags here").unwrap()],
        );

        assert!(aggregate_tags(&collections).is_empty());
    }
}

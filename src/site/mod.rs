use std::collections::BTreeMap;
use log::info;
use rayon::prelude::*;

use crate::collections::{aggregate_tags, load_collection, Tag};
use crate::config::Config;
use crate::content::ContentItem;
use crate::utils::error::{BoxResult, SiteError};

/// The aggregate every render call consumes, read-only.
///
/// A pure function of configuration and filesystem content: building twice
/// with unchanged inputs yields structurally identical data, which keeps
/// dev-server rebuilds race-free and output reproducible across machines.
#[derive(Debug, Clone)]
pub struct SiteData {
    /// The resolved configuration the build ran with
    pub config: Config,

    /// Collection name to its ordered items
    pub collections: BTreeMap<String, Vec<ContentItem>>,

    /// Tag slug to aggregated tag
    pub tags: BTreeMap<String, Tag>,

    /// All tags in slug order, for tag index listings
    pub all_tags: Vec<Tag>,
}

impl SiteData {
    /// Items of a collection, empty for unknown names
    pub fn items(&self, collection: &str) -> &[ContentItem] {
        self.collections
            .get(collection)
            .map(|items| items.as_slice())
            .unwrap_or(&[])
    }
}

/// Load every configured collection and aggregate tags across them.
///
/// Collections load in parallel but land in an ordered map, so iteration
/// order never depends on which collection's I/O finished first. One
/// collection failing to produce items does not abort the others; only a
/// missing content root is fatal.
pub fn build_site_data(config: &Config) -> BoxResult<SiteData> {
    if !config.input_dir.exists() {
        return Err(SiteError::Config(format!(
            "content root {} does not exist",
            config.input_dir.display()
        ))
        .into());
    }

    let names: Vec<&String> = config.collections.keys().collect();

    let collections: BTreeMap<String, Vec<ContentItem>> = names
        .par_iter()
        .map(|name| ((*name).clone(), load_collection(config, name)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect();

    for (name, items) in &collections {
        info!("Loaded {} items from \"{}\" collection", items.len(), name);
    }

    let tags = aggregate_tags(&collections);
    let all_tags: Vec<Tag> = tags.values().cloned().collect();

    Ok(SiteData {
        config: config.clone(),
        collections,
        tags,
        all_tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use crate::config::loader::finalize;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_content_root_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let config = finalize(tmp.path(), Config::default()).unwrap();

        // input_dir (<root>/src) was never created
        assert!(build_site_data(&config).is_err());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "src/posts/2024-01-01-a.md",
            "---\ntags: [Rust, cli]\n---\nbody",
        );
        write(
            tmp.path(),
            "src/posts/2024-01-02-b.md",
            "---\ntags: [rust]\n---\nbody",
        );
        write(tmp.path(), "src/pages/about.md", "About page");

        let config = finalize(tmp.path(), Config::default()).unwrap();
        let first = build_site_data(&config).unwrap();
        let second = build_site_data(&config).unwrap();

        let slugs = |site: &SiteData| -> Vec<String> {
            site.collections
                .values()
                .flatten()
                .map(|i| i.slug.clone())
                .collect()
        };
        assert_eq!(slugs(&first), slugs(&second));

        let tag_counts = |site: &SiteData| -> Vec<(String, usize)> {
            site.tags
                .values()
                .map(|t| (t.slug.clone(), t.count))
                .collect()
        };
        assert_eq!(tag_counts(&first), tag_counts(&second));
        assert_eq!(first.tags["rust"].count, 2);
    }

    #[test]
    fn test_one_bad_collection_does_not_abort_others() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "src/pages/about.md", "About page");
        // posts directory missing entirely

        let config = finalize(tmp.path(), Config::default()).unwrap();
        let site = build_site_data(&config).unwrap();

        assert!(site.items("posts").is_empty());
        assert_eq!(site.items("pages").len(), 1);
    }
}

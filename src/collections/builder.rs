use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use log::{error, warn};
use walkdir::WalkDir;

use crate::config::{defaults, CollectionConfig, Config, SortOrder};
use crate::content::{loader, ContentItem};

/// Markdown file extensions recognized by the collection walk
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Load one collection: walk its directory, load every markdown file,
/// resolve permalinks and URLs, filter drafts and sort.
///
/// A missing directory yields an empty collection; a file that fails to
/// parse is logged and skipped while the rest of the collection loads.
pub fn load_collection(config: &Config, name: &str) -> Vec<ContentItem> {
    let Some(collection) = config.collections.get(name) else {
        warn!("Collection \"{}\" not found in config", name);
        return Vec::new();
    };

    let dir = config.collection_dir(collection);
    let mut items = Vec::new();

    for path in find_markdown_files(&dir) {
        match loader::load_item(&path) {
            Ok(mut item) => {
                finish_item(&mut item, name, collection, config);

                if item.draft && !config.server.show_drafts {
                    continue;
                }

                items.push(item);
            }
            Err(e) => {
                error!("Skipping {}: {}", path.display(), e);
            }
        }
    }

    warn_duplicate_slugs(name, &items);
    sort_items(&mut items, &collection.sort_by, collection.sort_order);

    items
}

/// Recursively find all markdown files under a directory, in a stable
/// filename order
pub fn find_markdown_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    MARKDOWN_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Assign collection metadata and compute permalink, URL and output path
fn finish_item(item: &mut ContentItem, name: &str, collection: &CollectionConfig, config: &Config) {
    item.collection = name.to_string();

    if item.layout.is_none() {
        item.layout = collection.layout.clone();
    }

    // Per-item front matter permalink overrides the collection pattern
    let pattern = if item.permalink.is_empty() {
        collection
            .permalink
            .clone()
            .unwrap_or_else(defaults::default_permalink)
    } else {
        item.permalink.clone()
    };

    let permalink = resolve_permalink(&pattern, &item.slug, &item.date);
    item.url = format!("{}{}", config.site.base_path, permalink);
    item.output_path = output_path_for(&config.output_dir, &permalink);
    item.permalink = permalink;
}

/// Substitute `:slug`, `:year`, `:month` and `:day` placeholders
pub fn resolve_permalink(pattern: &str, slug: &str, date: &DateTime<Utc>) -> String {
    pattern
        .replace(":slug", slug)
        .replace(":year", &date.format("%Y").to_string())
        .replace(":month", &date.format("%m").to_string())
        .replace(":day", &date.format("%d").to_string())
}

/// Output path for a directory-style permalink:
/// `<output_dir>/<permalink>/index.html`
pub fn output_path_for(output_dir: &Path, permalink: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in permalink.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

/// Stable sort by the configured field. Dates compare numerically, strings
/// lexicographically; missing or mismatched fields compare equal.
fn sort_items(items: &mut [ContentItem], sort_by: &str, sort_order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare_items(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_items(a: &ContentItem, b: &ContentItem, field: &str) -> Ordering {
    match field {
        "date" => a.date.cmp(&b.date),
        "slug" => a.slug.cmp(&b.slug),
        "title" => a.title.cmp(&b.title),
        _ => match (a.custom.get(field), b.custom.get(field)) {
            (Some(serde_yaml::Value::String(x)), Some(serde_yaml::Value::String(y))) => x.cmp(y),
            (Some(serde_yaml::Value::Number(x)), Some(serde_yaml::Value::Number(y))) => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

fn warn_duplicate_slugs(name: &str, items: &[ContentItem]) {
    let mut seen: HashMap<&str, &Path> = HashMap::new();

    for item in items {
        if let Some(first) = seen.insert(item.slug.as_str(), &item.source_path) {
            warn!(
                "Duplicate slug \"{}\" in collection \"{}\" ({} and {}); \
                 the last processed item wins",
                item.slug,
                name,
                first.display(),
                item.source_path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::config::loader::finalize;

    fn test_config(root: &Path) -> Config {
        finalize(root, Config::default()).unwrap()
    }

    fn write_post(root: &Path, name: &str, content: &str) {
        let dir = root.join("src/posts");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_resolve_permalink_placeholders() {
        let date = loader::parse_date_string("2024-03-05").unwrap();
        let permalink = resolve_permalink("/blog/:year/:month/:day/:slug/", "my-post", &date);

        assert_eq!(permalink, "/blog/2024/03/05/my-post/");
    }

    #[test]
    fn test_output_path_is_directory_style() {
        let path = output_path_for(Path::new("/site/dist"), "/blog/my-post/");
        assert_eq!(path, PathBuf::from("/site/dist/blog/my-post/index.html"));
    }

    #[test]
    fn test_missing_directory_is_empty_collection() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        assert!(load_collection(&config, "posts").is_empty());
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        assert!(load_collection(&config, "no-such-collection").is_empty());
    }

    #[test]
    fn test_drafts_filtered_unless_enabled() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "2024-01-01-live.md", "---\ntitle: Live\n---\nbody");
        write_post(
            tmp.path(),
            "2024-01-02-wip.md",
            "---\ntitle: WIP\ndraft: true\n---\nbody",
        );

        let mut config = test_config(tmp.path());
        let items = load_collection(&config, "posts");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "live");

        config.server.show_drafts = true;
        let items = load_collection(&config, "posts");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_parse_error_skips_only_that_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "good.md", "---\ntitle: Good\n---\nbody");
        write_post(tmp.path(), "bad.md", "---\ntitle: [broken\n---\nbody");

        let config = test_config(tmp.path());
        let items = load_collection(&config, "posts");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "good");
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "2024-01-01-first.md", "a");
        write_post(tmp.path(), "2024-01-03-third.md", "c");
        write_post(tmp.path(), "2024-01-02-second.md", "b");

        let config = test_config(tmp.path());
        let slugs: Vec<String> = load_collection(&config, "posts")
            .into_iter()
            .map(|i| i.slug)
            .collect();

        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_sort_order_ascending() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "2024-01-01-first.md", "a");
        write_post(tmp.path(), "2024-01-02-second.md", "b");

        let mut config = test_config(tmp.path());
        config.collections.get_mut("posts").unwrap().sort_order = SortOrder::Asc;

        let slugs: Vec<String> = load_collection(&config, "posts")
            .into_iter()
            .map(|i| i.slug)
            .collect();

        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[test]
    fn test_item_permalink_overrides_pattern() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(
            tmp.path(),
            "2024-01-01-custom.md",
            "---\npermalink: /elsewhere/:slug/\n---\nbody",
        );

        let config = test_config(tmp.path());
        let items = load_collection(&config, "posts");

        assert_eq!(items[0].permalink, "/elsewhere/custom/");
    }

    #[test]
    fn test_url_includes_base_path() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "2024-01-01-post.md", "body");

        let mut config = Config::default();
        config.site.url = "https://example.org/mysite".to_string();
        let config = finalize(tmp.path(), config).unwrap();

        let items = load_collection(&config, "posts");
        assert!(items[0].url.starts_with("/mysite/blog/"));
        assert_eq!(items[0].permalink, "/blog/2024/01/01/post/");
    }

    #[test]
    fn test_collection_layout_default_applied() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "2024-01-01-a.md", "body");
        write_post(
            tmp.path(),
            "2024-01-02-b.md",
            "---\nlayout: special\n---\nbody",
        );

        let config = test_config(tmp.path());
        let items = load_collection(&config, "posts");

        assert_eq!(items[0].layout.as_deref(), Some("special"));
        assert_eq!(items[1].layout.as_deref(), Some("post"));
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::types::{CollectionConfig, IndexConfig, SortOrder};

pub fn default_site_title() -> String {
    "My Site".to_string()
}

pub fn default_site_description() -> String {
    "A static site built with siteforge".to_string()
}

pub fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

pub fn default_input() -> PathBuf {
    PathBuf::from("src")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_layouts() -> PathBuf {
    PathBuf::from("_layouts")
}

pub fn default_includes() -> PathBuf {
    PathBuf::from("_includes")
}

pub fn default_sort_by() -> String {
    "date".to_string()
}

pub fn default_pagination_size() -> usize {
    10
}

pub fn default_server_port() -> u16 {
    3000
}

pub fn default_feed_collection() -> String {
    "posts".to_string()
}

pub fn default_feed_count() -> usize {
    20
}

pub fn default_feed_path() -> String {
    "feed.xml".to_string()
}

pub fn default_permalink() -> String {
    "/:slug/".to_string()
}

/// The out-of-the-box collection set: blog posts, standalone pages and
/// short notes
pub fn default_collections() -> BTreeMap<String, CollectionConfig> {
    let mut collections = BTreeMap::new();

    collections.insert(
        "posts".to_string(),
        CollectionConfig {
            path: "posts".to_string(),
            layout: Some("post".to_string()),
            permalink: Some("/blog/:year/:month/:day/:slug/".to_string()),
            sort_by: default_sort_by(),
            sort_order: SortOrder::Desc,
            index: Some(IndexConfig {
                layout: "blog".to_string(),
                url: "/blog/".to_string(),
            }),
        },
    );

    collections.insert(
        "pages".to_string(),
        CollectionConfig {
            path: "pages".to_string(),
            layout: Some("page".to_string()),
            permalink: Some("/:slug/".to_string()),
            sort_by: default_sort_by(),
            sort_order: SortOrder::Desc,
            index: None,
        },
    );

    collections.insert(
        "notes".to_string(),
        CollectionConfig {
            path: "notes".to_string(),
            layout: Some("note".to_string()),
            permalink: Some("/notes/:slug/".to_string()),
            sort_by: default_sort_by(),
            sort_order: SortOrder::Desc,
            index: Some(IndexConfig {
                layout: "notes".to_string(),
                url: "/notes/".to_string(),
            }),
        },
    );

    collections
}

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// Site-wide metadata exposed to every template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Site description
    #[serde(default = "defaults::default_site_description")]
    pub description: String,

    /// Canonical site URL; its path component becomes the base path
    #[serde(default = "defaults::default_site_url")]
    pub url: String,

    /// Site author
    #[serde(default)]
    pub author: Option<String>,

    /// URL path prefix for hosting under a subdirectory, computed from `url`
    #[serde(skip)]
    pub base_path: String,

    /// Custom site-level values, passed through to templates
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta {
            title: defaults::default_site_title(),
            description: defaults::default_site_description(),
            url: defaults::default_site_url(),
            author: None,
            base_path: String::new(),
            custom: HashMap::new(),
        }
    }
}

/// Sort direction for a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A paginated index page for a collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Layout template for the listing pages
    pub layout: String,

    /// Base URL of the listing, e.g. `/blog/`
    pub url: String,
}

/// Configuration for one collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Directory of the collection, relative to the input directory
    pub path: String,

    /// Default layout for items in this collection
    #[serde(default)]
    pub layout: Option<String>,

    /// Permalink pattern with `:slug`/`:year`/`:month`/`:day` placeholders
    #[serde(default)]
    pub permalink: Option<String>,

    /// Front matter field to sort by
    #[serde(default = "defaults::default_sort_by")]
    pub sort_by: String,

    /// Sort direction
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Paginated index listing, if the collection has one
    #[serde(default)]
    pub index: Option<IndexConfig>,
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items per listing page
    #[serde(default = "defaults::default_pagination_size")]
    pub size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            size: defaults::default_pagination_size(),
        }
    }
}

/// Development server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "defaults::default_server_port")]
    pub port: u16,

    /// Include drafts in the build. Only ever enabled for local
    /// development, never in a production build.
    #[serde(default)]
    pub show_drafts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: defaults::default_server_port(),
            show_drafts: false,
        }
    }
}

/// RSS feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Whether to emit a feed at all
    #[serde(default = "default_true")]
    pub enable: bool,

    /// Collection the feed is built from
    #[serde(default = "defaults::default_feed_collection")]
    pub collection: String,

    /// Maximum number of feed entries
    #[serde(default = "defaults::default_feed_count")]
    pub count: usize,

    /// Output path of the feed, relative to the output directory
    #[serde(default = "defaults::default_feed_path")]
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            enable: true,
            collection: defaults::default_feed_collection(),
            count: defaults::default_feed_count(),
            path: defaults::default_feed_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Resolved site configuration.
///
/// Deserialized from `_config.yml` / `_config.json` with per-field defaults;
/// computed paths and the base path are filled in by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site metadata
    #[serde(default)]
    pub site: SiteMeta,

    /// Content input directory, relative to the site root
    #[serde(default = "defaults::default_input")]
    pub input: PathBuf,

    /// Output directory, relative to the site root
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Layouts directory, relative to the site root
    #[serde(default = "defaults::default_layouts")]
    pub layouts: PathBuf,

    /// Includes directory, relative to the site root
    #[serde(default = "defaults::default_includes")]
    pub includes: PathBuf,

    /// Collections keyed by name. The map is ordered, which fixes the
    /// iteration order of every build stage regardless of load parallelism.
    #[serde(default = "defaults::default_collections")]
    pub collections: BTreeMap<String, CollectionConfig>,

    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Dev server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Site root directory (computed)
    #[serde(skip)]
    pub root_dir: PathBuf,

    /// Absolute input directory (computed)
    #[serde(skip)]
    pub input_dir: PathBuf,

    /// Absolute output directory (computed)
    #[serde(skip)]
    pub output_dir: PathBuf,

    /// Absolute layouts directory (computed)
    #[serde(skip)]
    pub layouts_dir: PathBuf,

    /// Absolute includes directory (computed)
    #[serde(skip)]
    pub includes_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteMeta::default(),
            input: defaults::default_input(),
            output: defaults::default_output(),
            layouts: defaults::default_layouts(),
            includes: defaults::default_includes(),
            collections: defaults::default_collections(),
            pagination: PaginationConfig::default(),
            server: ServerConfig::default(),
            feed: FeedConfig::default(),
            root_dir: PathBuf::new(),
            input_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            layouts_dir: PathBuf::new(),
            includes_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Absolute directory of a collection
    pub fn collection_dir(&self, collection: &CollectionConfig) -> PathBuf {
        self.input_dir.join(&collection.path)
    }
}

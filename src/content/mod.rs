pub mod loader;

use std::collections::HashMap;
use std::path::PathBuf;
use chrono::{DateTime, Utc};

pub use loader::{load_item, build_item};

/// One parsed content file.
///
/// Created once per build by the content loader, completed by the collection
/// builder (collection, layout, permalink, url, output path) and immutable
/// afterwards. Every rebuild starts from scratch.
#[derive(Debug, Clone, Default)]
pub struct ContentItem {
    /// URL-safe identifier, unique within a collection and permalink pattern
    pub slug: String,

    /// Publication date, from front matter, the filename prefix or build time
    pub date: DateTime<Utc>,

    /// Title from front matter, if any
    pub title: Option<String>,

    /// Markdown source of the body
    pub raw_body: String,

    /// Body after markdown rendering and embed rewriting
    pub rendered_html: String,

    /// Explicit or derived excerpt, capped at 200 characters
    pub excerpt: String,

    /// Normalized tag list
    pub tags: Vec<String>,

    /// Name of the owning collection
    pub collection: String,

    /// Layout template identifier
    pub layout: Option<String>,

    /// Draft flag
    pub draft: bool,

    /// Resolved permalink, e.g. `/blog/my-post/`
    pub permalink: String,

    /// base path + permalink
    pub url: String,

    /// Filesystem path the rendered page is written to
    pub output_path: PathBuf,

    /// Path of the source file
    pub source_path: PathBuf,

    /// Remaining front matter fields, passed through to templates
    pub custom: HashMap<String, serde_yaml::Value>,
}

pub mod types;
pub mod defaults;
pub mod loader;
pub mod validation;

pub use types::{
    CollectionConfig, Config, FeedConfig, IndexConfig, PaginationConfig, ServerConfig, SiteMeta,
    SortOrder,
};
pub use loader::load_config;

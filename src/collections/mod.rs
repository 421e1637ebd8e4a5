pub mod builder;
pub mod tags;
pub mod pagination;

pub use builder::load_collection;
pub use tags::{aggregate_tags, Tag};
pub use pagination::{paginate, pagination_urls, page_url, Page, PaginationUrls};

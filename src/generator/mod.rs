pub mod rss;

pub use rss::build_feed;

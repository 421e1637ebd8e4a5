pub mod builder;
pub mod cli;
pub mod collections;
pub mod config;
pub mod content;
pub mod front_matter;
pub mod generator;
pub mod markdown;
pub mod plugins;
pub mod render;
pub mod server;
pub mod site;
pub mod utils;

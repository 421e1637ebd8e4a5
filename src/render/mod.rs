pub mod data;
pub mod engine;
pub mod writer;

pub use engine::{LiquidRenderer, Renderer};
pub use writer::{write_site, WriteStats};

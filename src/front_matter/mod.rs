pub mod types;
pub mod parser;

pub use types::{FrontMatter, TagField};
pub use parser::{parse, ParsedFile};

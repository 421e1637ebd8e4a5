pub mod build;
pub mod new;
pub mod serve;

pub use build::{handle_build_command, handle_clean_command};
pub use new::{handle_new_command, handle_new_page_command, handle_new_post_command};
pub use serve::handle_serve_command;

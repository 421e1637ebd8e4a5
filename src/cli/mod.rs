pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use std::path::PathBuf;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug);

    let root = cli
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(types::Commands::Build { drafts, clean }) => {
            commands::handle_build_command(&root, drafts, clean);
        }
        Some(types::Commands::Serve { port, drafts }) => {
            commands::handle_serve_command(&root, port, drafts).await;
        }
        Some(types::Commands::New { target }) => match target {
            types::NewTarget::Site { path } => {
                commands::handle_new_command(&path);
            }
            types::NewTarget::Post { title, draft } => {
                commands::handle_new_post_command(&root, &title, draft);
            }
            types::NewTarget::Page { title } => {
                commands::handle_new_page_command(&root, &title);
            }
        },
        Some(types::Commands::Clean {}) => {
            commands::handle_clean_command(&root);
        }
        None => {
            // Default to a plain build
            commands::handle_build_command(&root, false, false);
        }
    }
}

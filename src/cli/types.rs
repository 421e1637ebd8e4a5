use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "siteforge")]
#[command(about = "Markdown static site generator with live reload", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the site
    #[command(alias = "b")]
    Build {
        /// Include draft content
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,

        /// Remove the output directory first
        #[arg(long, default_value_t = false)]
        clean: bool,
    },

    /// Serve the site locally with live reload
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,

        /// Include draft content
        #[arg(short = 'D', long, default_value_t = false)]
        drafts: bool,
    },

    /// Scaffold a new site or content file
    New {
        #[command(subcommand)]
        target: NewTarget,
    },

    /// Remove the output directory
    Clean {},
}

/// What `new` scaffolds
#[derive(Subcommand)]
pub enum NewTarget {
    /// Create a new site at the given path
    Site {
        /// Directory to create the site in
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Create a dated post with front matter
    Post {
        /// Title of the post; the filename slug derives from it
        title: String,

        /// Mark the post as a draft
        #[arg(long, default_value_t = false)]
        draft: bool,
    },

    /// Create a page with front matter
    Page {
        /// Title of the page
        title: String,
    },
}

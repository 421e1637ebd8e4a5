use std::path::Path;
use log::{error, info};

use crate::builder::{build_site, clean_output};
use crate::config::loader::load_config;
use crate::plugins::HookRegistry;

/// Handle the build command
pub fn handle_build_command(root: &Path, drafts: bool, clean: bool) {
    let mut config = match load_config(root) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };
    config.server.show_drafts = drafts;

    if clean {
        if let Err(e) = clean_output(&config) {
            error!("Failed to clean output directory: {}", e);
            return;
        }
    }

    match build_site(&config, &HookRegistry::new()) {
        Ok(_) => info!("Site built at {}", config.output_dir.display()),
        Err(e) => error!("Build failed: {}", e),
    }
}

/// Handle the clean command
pub fn handle_clean_command(root: &Path) {
    match load_config(root) {
        Ok(config) => {
            if let Err(e) = clean_output(&config) {
                error!("Failed to clean output directory: {}", e);
            }
        }
        Err(e) => error!("Failed to load configuration: {}", e),
    }
}

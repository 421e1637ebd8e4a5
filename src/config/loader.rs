use std::fs;
use std::path::Path;
use log::{debug, info};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, SiteError};

/// Load site configuration from `_config.yml` or `_config.json` under the
/// given root, falling back to defaults when neither exists
pub fn load_config(root_dir: &Path) -> BoxResult<Config> {
    let yaml_path = root_dir.join("_config.yml");
    let json_path = root_dir.join("_config.json");

    let config = if yaml_path.exists() {
        debug!("Loading configuration from {}", yaml_path.display());
        let content = fs::read_to_string(&yaml_path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            SiteError::Config(format!("failed to parse {}: {}", yaml_path.display(), e))
        })?
    } else if json_path.exists() {
        debug!("Loading configuration from {}", json_path.display());
        let content = fs::read_to_string(&json_path)?;
        serde_json::from_str(&content).map_err(|e| {
            SiteError::Config(format!("failed to parse {}: {}", json_path.display(), e))
        })?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    finalize(root_dir, config)
}

/// Fill in computed paths and the base path, then validate
pub fn finalize(root_dir: &Path, mut config: Config) -> BoxResult<Config> {
    config.site.base_path = base_path_from_url(&config.site.url);

    config.root_dir = root_dir.to_path_buf();
    config.input_dir = root_dir.join(&config.input);
    config.output_dir = root_dir.join(&config.output);
    config.layouts_dir = root_dir.join(&config.layouts);
    config.includes_dir = root_dir.join(&config.includes);

    validation::validate_config(&mut config)?;

    Ok(config)
}

/// Extract the base path from the site URL, e.g.
/// `https://example.org/mysite/` yields `/mysite`
fn base_path_from_url(url: &str) -> String {
    let without_scheme = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => url,
    };

    match without_scheme.find('/') {
        Some(pos) => without_scheme[pos..].trim_end_matches('/').to_string(),
        None => String::new(),
    }
}

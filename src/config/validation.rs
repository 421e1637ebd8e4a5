use log::warn;

use crate::config::defaults;
use crate::config::types::Config;
use crate::utils::error::{BoxResult, SiteError};

/// Validate the loaded configuration.
///
/// Structural problems that would corrupt the whole build are errors;
/// per-collection oddities are warnings and the collection degrades to
/// best-effort behavior.
pub fn validate_config(config: &mut Config) -> BoxResult<()> {
    if config.input == config.output {
        return Err(SiteError::Config(
            "input and output directories must differ".to_string(),
        )
        .into());
    }

    if config.pagination.size == 0 {
        warn!(
            "pagination.size must be a positive integer, falling back to {}",
            defaults::default_pagination_size()
        );
        config.pagination.size = defaults::default_pagination_size();
    }

    for (name, collection) in &config.collections {
        if collection.path.trim().is_empty() {
            warn!(
                "Collection \"{}\" has an empty path and will load no items",
                name
            );
        }

        if let Some(pattern) = &collection.permalink {
            if !pattern.contains(":slug") {
                warn!(
                    "Collection \"{}\" permalink pattern \"{}\" has no :slug placeholder; \
                     items may collide on the same output path",
                    name, pattern
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_same_input_output_rejected() {
        let mut config = Config::default();
        config.input = PathBuf::from("site");
        config.output = PathBuf::from("site");

        assert!(validate_config(&mut config).is_err());
    }

    #[test]
    fn test_zero_pagination_size_reset() {
        let mut config = Config::default();
        config.pagination.size = 0;

        validate_config(&mut config).unwrap();
        assert_eq!(config.pagination.size, 10);
    }
}

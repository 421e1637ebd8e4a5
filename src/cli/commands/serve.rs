use std::path::Path;
use log::error;

use crate::config::loader::load_config;
use crate::config::Config;
use crate::server;

/// Handle the serve command
pub async fn handle_serve_command(root: &Path, port: Option<u16>, drafts: bool) {
    let mut config = match load_config(root) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return;
        }
    };

    apply_serve_overrides(&mut config, port, drafts);

    if let Err(e) = server::serve(config).await {
        error!("Server error: {}", e);
    }
}

/// Apply CLI flags over the loaded configuration. Flags only override
/// when actually passed; a config-level `show_drafts` survives an
/// absent `--drafts`.
fn apply_serve_overrides(config: &mut Config, port: Option<u16>, drafts: bool) {
    if drafts {
        config.server.show_drafts = true;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafts_flag_enables_show_drafts() {
        let mut config = Config::default();
        assert!(!config.server.show_drafts);

        apply_serve_overrides(&mut config, None, true);
        assert!(config.server.show_drafts);
    }

    #[test]
    fn test_absent_flag_keeps_config_value() {
        let mut config = Config::default();
        config.server.show_drafts = true;

        apply_serve_overrides(&mut config, None, false);
        assert!(config.server.show_drafts);
    }

    #[test]
    fn test_port_override() {
        let mut config = Config::default();
        apply_serve_overrides(&mut config, Some(8080), false);
        assert_eq!(config.server.port, 8080);

        apply_serve_overrides(&mut config, None, false);
        assert_eq!(config.server.port, 8080);
    }
}

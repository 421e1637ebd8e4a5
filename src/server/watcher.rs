use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;
use log::{debug, error, info};
use notify::{Event, RecursiveMode, Watcher};
use tokio::sync::broadcast;

use crate::builder::build_site;
use crate::config::loader::load_config;
use crate::config::Config;
use crate::plugins::HookRegistry;
use crate::utils::error::BoxResult;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Start the rebuild thread: watch the content sources, collapse event
/// bursts, rebuild and announce a reload.
///
/// A single thread does the rebuilding, so builds never overlap; events
/// arriving mid-build queue up and collapse into the next pass.
pub fn spawn(config: Config, reload_tx: broadcast::Sender<()>) {
    std::thread::spawn(move || {
        if let Err(e) = watch_loop(&config, reload_tx) {
            error!("File watcher stopped: {}", e);
        }
    });
}

fn watch_loop(config: &Config, reload_tx: broadcast::Sender<()>) -> BoxResult<()> {
    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    // Watch sources only, never the output directory: a rebuild writing
    // output must not trigger the next rebuild
    for dir in [&config.input_dir, &config.layouts_dir, &config.includes_dir] {
        if dir.exists() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
        }
    }
    for name in ["_config.yml", "_config.json"] {
        let path = config.root_dir.join(name);
        if path.exists() {
            watcher.watch(&path, RecursiveMode::NonRecursive)?;
        }
    }

    loop {
        let Ok(event) = rx.recv() else {
            return Ok(());
        };
        if !is_relevant(&event) {
            continue;
        }
        debug!("File event: {:?}", event);

        // Keep extending the quiet window while events still arrive, so
        // one save producing several events rebuilds once
        loop {
            match rx.recv_timeout(DEBOUNCE) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        info!("Change detected, rebuilding...");
        rebuild(config, &reload_tx);
    }
}

/// One rebuild pass. The config file may itself have changed, so it is
/// re-read from disk; CLI overrides like draft visibility carry over.
fn rebuild(config: &Config, reload_tx: &broadcast::Sender<()>) {
    let fresh = match load_config(&config.root_dir) {
        Ok(mut fresh) => {
            fresh.server.show_drafts = config.server.show_drafts;
            fresh
        }
        Err(e) => {
            error!("Failed to reload configuration: {}", e);
            return;
        }
    };

    match build_site(&fresh, &HookRegistry::new()) {
        Ok(_) => {
            let _ = reload_tx.send(());
        }
        Err(e) => error!("Rebuild failed: {}", e),
    }
}

/// Ignore editor droppings: hidden files and backup suffixes
fn is_relevant(event: &Event) -> bool {
    event.paths.iter().any(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        !name.starts_with('.') && !name.ends_with('~')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn event_for(path: &str) -> Event {
        let mut event = Event::new(notify::EventKind::Any);
        event.paths.push(PathBuf::from(path));
        event
    }

    #[test]
    fn test_hidden_and_backup_files_are_ignored() {
        assert!(!is_relevant(&event_for("/site/src/.post.md.swp")));
        assert!(!is_relevant(&event_for("/site/src/post.md~")));
        assert!(is_relevant(&event_for("/site/src/post.md")));
    }

    #[test]
    fn test_event_with_any_relevant_path_counts() {
        let mut event = event_for("/site/src/.hidden");
        event.paths.push(PathBuf::from("/site/src/real.md"));
        assert!(is_relevant(&event));
    }
}

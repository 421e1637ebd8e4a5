pub mod static_files;
pub mod watcher;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use log::{error, info};
use tokio::sync::broadcast;

use crate::builder::build_site;
use crate::config::Config;
use crate::plugins::HookRegistry;
use crate::utils::error::BoxResult;

/// Shared state of the dev server
pub struct AppState {
    /// Directory the built site is served from
    pub output_dir: PathBuf,

    /// Reload announcements, one receiver per open page
    pub reload_tx: broadcast::Sender<()>,
}

/// Build the site, then serve it with file watching and live reload
/// until interrupted.
pub async fn serve(config: Config) -> BoxResult<()> {
    if let Err(e) = build_site(&config, &HookRegistry::new()) {
        error!("Initial build failed: {}", e);
        info!("Serving whatever exists in the output directory");
    }

    let (reload_tx, _) = broadcast::channel::<()>(16);
    watcher::spawn(config.clone(), reload_tx.clone());

    let state = Arc::new(AppState {
        output_dir: config.output_dir.clone(),
        reload_tx,
    });

    let app = Router::new()
        .route("/__livereload", get(livereload_handler))
        .fallback(get(static_files::serve_asset))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        "Serving {} at http://{}",
        config.output_dir.display(),
        addr
    );

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}

async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| relay_reloads(socket, rx))
}

async fn relay_reloads(mut socket: WebSocket, mut rx: broadcast::Receiver<()>) {
    loop {
        match rx.recv().await {
            Ok(()) => {
                if socket.send(Message::Text("reload".into())).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

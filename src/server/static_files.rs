use std::path::{Path, PathBuf};
use std::sync::Arc;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;

/// Script injected into served HTML pages. Reconnects are deliberate:
/// the page that triggered a rebuild reloads into a fresh socket.
const LIVERELOAD_SCRIPT: &str = "<script>\n(function () {\n  var proto = location.protocol === 'https:' ? 'wss://' : 'ws://';\n  var socket = new WebSocket(proto + location.host + '/__livereload');\n  socket.onmessage = function () { location.reload(); };\n})();\n</script>\n";

/// Serve one file out of the output directory.
///
/// Directories resolve to their `index.html`, extensionless paths fall
/// back to `.html`, and HTML responses get the live-reload script
/// injected before `</body>`.
pub async fn serve_asset(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let Some(path) = resolve_path(&state.output_dir, uri.path()) else {
        return not_found(&state.output_dir);
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(_) => return not_found(&state.output_dir),
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    if mime == mime_guess::mime::TEXT_HTML {
        let html = inject_reload_script(&String::from_utf8_lossy(&bytes));
        return (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response();
    }

    ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
}

/// Map a request path onto the output directory, rejecting traversal
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();

    for segment in request_path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            seg => path.push(seg),
        }
    }

    if path.is_dir() {
        path.push("index.html");
    }
    if path.is_file() {
        return Some(path);
    }

    // /about resolves to about.html when the bare path misses
    if path.extension().is_none() {
        let with_ext = path.with_extension("html");
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }

    None
}

fn not_found(root: &Path) -> Response {
    let body = match std::fs::read_to_string(root.join("404.html")) {
        Ok(html) => inject_reload_script(&html),
        Err(_) => "<h1>404 Not Found</h1>".to_string(),
    };

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    )
        .into_response()
}

fn inject_reload_script(html: &str) -> String {
    match html.rfind("</body>") {
        Some(idx) => format!("{}{}{}", &html[..idx], LIVERELOAD_SCRIPT, &html[idx..]),
        None => format!("{}{}", html, LIVERELOAD_SCRIPT),
    }
}

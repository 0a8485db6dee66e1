//! Live preview server.
//!
//! Serves the serializer's exact output at `/preview` inside a device-width
//! chrome at `/`, and reloads connected clients whenever the portfolio
//! document changes on disk. Because the preview frame loads the serialized
//! bytes themselves, what you see is what `folio build` exports.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::RwLock;

use folio_doc::{DeviceType, Portfolio};
use folio_render::serialize;

use crate::watcher::{DocumentWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Portfolio document to preview
    pub document: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("portfolio.json"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to read document {0}: {1}")]
    DocumentError(PathBuf, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: PreviewServerConfig,
    portfolio: Portfolio,
    hub: ReloadHub,
}

/// Live preview server.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let portfolio = load_document(&self.config.document)?;

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            portfolio,
            hub: ReloadHub::new(),
        }));

        // Watch the document's directory so editor save-and-rename cycles
        // are picked up too.
        let watch_root = self
            .config
            .document
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let (watcher, mut rx) = DocumentWatcher::new(&[watch_root])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = Router::new()
            .route("/", get(chrome_handler))
            .route("/preview", get(preview_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .with_state(state);

        tracing::info!("Starting preview server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Read and decode a portfolio document from disk.
fn load_document(path: &Path) -> Result<Portfolio, ServerError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ServerError::DocumentError(path.to_path_buf(), e.to_string()))?;

    Portfolio::from_json(&json)
        .map_err(|e| ServerError::DocumentError(path.to_path_buf(), e.to_string()))
}

/// Handle document watch events.
async fn handle_watch_event(state: &Arc<RwLock<ServerState>>, event: WatchEvent) {
    let document = { state.read().await.config.document.clone() };

    let changed = match &event {
        WatchEvent::DocumentModified(path) | WatchEvent::Created(path) => {
            path.file_name() == document.file_name()
        }
        _ => false,
    };
    if !changed {
        return;
    }

    tracing::info!("Document modified: {}", document.display());

    match load_document(&document) {
        Ok(portfolio) => {
            let mut state = state.write().await;
            state.portfolio = portfolio;
            state.hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            // Keep serving the last good document until the edit parses.
            tracing::warn!("Ignoring unparseable document edit: {}", e);
        }
    }
}

/// Frame width for a preview device.
fn frame_width(device: DeviceType) -> &'static str {
    match device {
        DeviceType::Desktop => "896px",
        DeviceType::Tablet => "768px",
        DeviceType::Mobile => "375px",
    }
}

/// Handler for the preview chrome page.
async fn chrome_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let device = state.portfolio.preview_device;

    // Theme colors style the chrome only; the document in the frame carries
    // its own per-section presentation.
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>folio preview</title>
  <style>
    body {{ margin: 0; background: #e5e7eb; font-family: system-ui, sans-serif; }}
    header {{ padding: 0.5rem 1rem; background: #111827; color: #f9fafb; font-size: 0.875rem; border-bottom: 2px solid {accent}; }}
    .frame {{ display: flex; justify-content: center; padding: 1.5rem; }}
    iframe {{ width: 100%; max-width: {width}; height: calc(100vh - 6rem); border: none; background: white; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); transition: max-width 0.3s; }}
  </style>
</head>
<body>
  <header>{document} &middot; {device} preview</header>
  <div class="frame">
    <iframe src="/preview"></iframe>
  </div>
  <script src="/__reload.js"></script>
</body>
</html>"#,
        accent = state.portfolio.theme.primary_color,
        width = frame_width(device),
        device = device_label(device),
        document = state.config.document.display(),
    ))
}

fn device_label(device: DeviceType) -> &'static str {
    match device {
        DeviceType::Desktop => "desktop",
        DeviceType::Tablet => "tablet",
        DeviceType::Mobile => "mobile",
    }
}

/// Handler serving the serialized document itself.
async fn preview_handler(State(state): State<Arc<RwLock<ServerState>>>) -> impl IntoResponse {
    let state = state.read().await;

    Html(serialize(&state.portfolio))
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<RwLock<ServerState>>) {
    let mut rx = {
        let state = state.read().await;
        state.hub.subscribe()
    };

    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(
    State(state): State<Arc<RwLock<ServerState>>>,
) -> impl IntoResponse {
    let state = state.read().await;
    let script = reload_client_script(&format!(
        "ws://{}:{}/__reload",
        state.config.host, state.config.port
    ));

    ([("content-type", "application/javascript")], script)
}

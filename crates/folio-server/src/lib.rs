//! Live preview server for folio portfolios.
//!
//! Watches the portfolio document, serves the serialized export for preview,
//! and pushes WebSocket reload messages to connected browsers on change.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{PreviewServer, PreviewServerConfig, ServerError};
pub use watcher::{DocumentWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};

//! Live preview command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_server::{PreviewServer, PreviewServerConfig};

use crate::config::load_config;

/// Run the preview server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let port = port.unwrap_or(config.preview.port);

    tracing::info!("Starting preview server on port {}", port);

    let server_config = PreviewServerConfig {
        document: PathBuf::from(&config.portfolio.file),
        host: config.preview.host,
        port,
        open,
    };

    PreviewServer::new(server_config).start().await?;

    Ok(())
}

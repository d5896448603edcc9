//! Development server command.

use std::path::Path;

use anyhow::Result;
use stylekit_server::{DevServer, DevServerConfig};

use crate::config::ConfigFile;

/// Run the dev server.
pub async fn run(config_path: &Path, port: Option<u16>, open: bool) -> Result<()> {
    let file_config = ConfigFile::load(config_path)?;

    let mut site = file_config.build_config(None);
    site.minify = false;

    let config = DevServerConfig {
        site,
        port: port.unwrap_or(file_config.dev.port),
        host: file_config.dev.host.clone(),
        open: open && file_config.dev.open,
    };

    tracing::info!("Starting development server on port {}", config.port);

    DevServer::new(config).start().await?;

    Ok(())
}

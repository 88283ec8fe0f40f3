//! Builder for creating and configuring Trello client instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Trello;
use crate::{
    config::Config,
    error::Result,
    transport::{http::DEFAULT_BASE_URL, HttpTransport},
};

/// Builder for creating and configuring [`Trello`] instances.
#[derive(Debug, Clone, Default)]
pub struct TrelloBuilder {
    config_path: Option<PathBuf>,
    base_url: Option<String>,
}

impl TrelloBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom credentials file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/trello-cli/config.json` or
    /// `~/.config/trello-cli/config.json`
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom API root, e.g. a local mock server.
    pub fn with_base_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Loads the credentials and builds the client.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::ConfigUnusable` if the credentials file is
    /// missing, malformed or unfilled.
    /// Returns `TrelloError::XdgDirectory` if no default path can be found.
    pub fn build(self) -> Result<Trello> {
        let config_path = match self.config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        debug!("Loading credentials from {}", config_path.display());

        let config = Config::load(&config_path)?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let transport = HttpTransport::new(&config, base_url)?;
        Ok(Trello::new(Box::new(transport)))
    }
}

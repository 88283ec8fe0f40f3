//! Credentials file handling.
//!
//! The API key and application token live in a small JSON file under the
//! user's configuration directory. On first run the file is created with
//! placeholder values and loading fails until the user fills them in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrelloError};

const PLACEHOLDER_KEY: &str = "INSERT API KEY";
const PLACEHOLDER_TOKEN: &str = "INSERT APP TOKEN";

/// API credentials as stored in `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub key: String,
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: PLACEHOLDER_KEY.to_string(),
            token: PLACEHOLDER_TOKEN.to_string(),
        }
    }
}

impl Config {
    /// Returns the default credentials path following the XDG Base Directory
    /// specification: `$XDG_CONFIG_HOME/trello-cli/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("trello-cli")
            .place_config_file("config.json")
            .map_err(|e| TrelloError::XdgDirectory(e.to_string()))
    }

    /// Loads credentials from `path`, writing a placeholder file first if
    /// none exists.
    ///
    /// # Errors
    ///
    /// Returns `TrelloError::ConfigUnusable` if the file had to be created,
    /// cannot be parsed, or still carries placeholder values.
    /// Returns `TrelloError::FileSystem` if the file cannot be read or
    /// written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            Self::write_template(path)?;
            return Err(TrelloError::config_unusable(format!(
                "please insert API key and APP token in {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path).map_err(|e| TrelloError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            TrelloError::config_unusable(format!(
                "error in configuration on line {}, column {}.",
                e.line(),
                e.column()
            ))
        })?;

        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let unset = |value: &str, placeholder: &str| {
            let value = value.trim();
            value.is_empty() || value == placeholder
        };

        if unset(&self.key, PLACEHOLDER_KEY) || unset(&self.token, PLACEHOLDER_TOKEN) {
            return Err(TrelloError::config_unusable(format!(
                "please insert API key and APP token in {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TrelloError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let template = serde_json::to_string_pretty(&Config::default())?;
        fs::write(path, template + "\n").map_err(|e| TrelloError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

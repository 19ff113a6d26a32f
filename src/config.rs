//! Configuration loading for mr-radar
//!
//! Reads a TOML file, validates required fields, and applies defaults before
//! any network activity happens.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir.
const CONFIG_DIR: &str = "mr-radar";

/// Filename for the configuration.
const CONFIG_FILE: &str = "config.toml";

/// Default API root when the config doesn't name one.
const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4";

/// Default target branch when the config doesn't name one.
const DEFAULT_TARGET_BRANCH: &str = "main";

/// Raw on-disk shape; everything optional so validation can report missing
/// required fields itself instead of surfacing serde's missing-field errors.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_token: Option<String>,
    project_id: Option<i64>,
    base_url: Option<String>,
    target_branch: Option<String>,
    authors: Option<HashMap<String, i64>>,
    concurrency: Option<usize>,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the API
    pub api_token: String,
    /// Numeric id of the project to monitor
    pub project_id: i64,
    /// API root, e.g. `https://gitlab.com/api/v4`
    pub base_url: String,
    /// Branch MRs must target to be reported
    pub target_branch: String,
    /// Label -> account id table; only the values matter. Empty means no
    /// author filter.
    pub authors: HashMap<String, i64>,
    /// Cap on concurrent approval requests. `None` fans out to the whole
    /// filtered set at once.
    pub concurrency: Option<usize>,
}

impl Config {
    /// Load configuration from the default location
    /// (`{config_dir}/mr-radar/config.toml`).
    pub fn load() -> Result<Self> {
        Self::load_from(&default_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {} (set api_token and project_id there)",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        let raw: RawConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

        raw.validate()
    }

    /// Account ids allowed through the author filter, in the table's
    /// iteration order. Empty means every author passes.
    pub fn author_ids(&self) -> Vec<i64> {
        self.authors.values().copied().collect()
    }
}

impl RawConfig {
    fn validate(self) -> Result<Config> {
        let api_token = self
            .api_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config("missing required field 'api_token'".to_string()))?;

        let project_id = self
            .project_id
            .ok_or_else(|| Error::Config("missing required field 'project_id'".to_string()))?;

        Ok(Config {
            api_token,
            project_id,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            target_branch: self
                .target_branch
                .unwrap_or_else(|| DEFAULT_TARGET_BRANCH.to_string()),
            authors: self.authors.unwrap_or_default(),
            concurrency: self.concurrency,
        })
    }
}

/// Path of the default config file.
fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| Error::Config("could not determine the user config directory".to_string()))
}

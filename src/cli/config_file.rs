//! Configuration file parsing for framecheck CLI

use crate::cli::error::{CliError, CliResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".framecheck.toml";

/// Report format for command output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings loaded from `.framecheck.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FramecheckConfig {
    /// Meta property prefixes to extract (defaults to `fc:` and `og:`)
    #[serde(default)]
    pub prefixes: Option<Vec<String>>,

    /// Default output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Load configuration from an explicit path or from the working directory
///
/// A missing default file is not an error; a missing explicit file is.
pub fn load_config(explicit: Option<&Path>) -> CliResult<FramecheckConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let current_dir = std::env::current_dir().map_err(|e| {
                CliError::Config(format!("Failed to get current directory: {}", e))
            })?;
            let candidate = config_path_in(&current_dir);
            if !candidate.is_file() {
                debug!("No {} in {}", CONFIG_FILE_NAME, current_dir.display());
                return Ok(FramecheckConfig::default());
            }
            candidate
        }
    };

    load_config_from_file(&path)
}

/// Parse a config file at `path`
pub fn load_config_from_file(path: &Path) -> CliResult<FramecheckConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config: FramecheckConfig = toml::from_str(&content).map_err(|e| {
        CliError::Config(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Path of the default config file for `dir`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

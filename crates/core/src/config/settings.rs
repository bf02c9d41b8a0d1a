use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CONTEXT_LOADER_CONFIG";

/// Extension appended to extensionless `classpath!` requests
pub const DEFAULT_EXTENSION: &str = "js";

const CONFIG_FILE_NAMES: &[&str] = &[
    ".context-loader.json",
    "context-loader.json",
    "config/default.json",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoaderConfig {
    /// Alias name to target, where the target may carry another prefix
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,

    /// Extra search roots, appended after the defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classpath: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_extension: Option<String>,
}

impl LoaderConfig {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Extension for extensionless `classpath!` requests
    pub fn default_extension(&self) -> &str {
        self.default_extension
            .as_deref()
            .unwrap_or(DEFAULT_EXTENSION)
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Configuration for a process started in `cwd`.
    ///
    /// `CONTEXT_LOADER_CONFIG` wins when set; otherwise the nearest config
    /// file is used; otherwise the configuration is empty.
    pub fn discover(cwd: &Path) -> Result<Self> {
        Self::discover_with(cwd, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    /// [`discover`](Self::discover) with the explicit config path supplied by
    /// the caller. A relative `explicit` path is taken relative to `cwd`.
    pub fn discover_with(cwd: &Path, explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(explicit) = explicit {
            let path = cwd.join(explicit);
            debug!("Loading config from {}: {:?}", CONFIG_ENV_VAR, path);
            return Self::load_from_file(&path);
        }

        match Self::find_config_file(cwd) {
            Some(path) => {
                debug!("Found config at: {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config found from {:?}", cwd);
                Ok(Self::default())
            }
        }
    }
}

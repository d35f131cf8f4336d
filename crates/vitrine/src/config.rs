//! Application configuration.
//!
//! Loaded from JSON layers, later layers deep-merged over earlier ones:
//! 1. built-in defaults
//! 2. the user config file (`<config dir>/vitrine/config.json`), if present
//! 3. an explicit `--config` file
//!
//! A relative `themes_dir` is resolved against the file that sets it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tenant::TenantSettings;
use crate::theme::merge_json;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Theme used by tenants that do not pick one.
    pub default_theme: String,
    /// Directory scanned for `*/theme.json` manifests.
    pub themes_dir: Option<PathBuf>,
    /// Keep resolved packages per context for fast switching back.
    pub cache_packages: bool,
    pub locale: String,
    pub tenants: BTreeMap<String, TenantSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: "default".to_string(),
            themes_dir: None,
            cache_packages: true,
            locale: "en".to_string(),
            tenants: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Per-user config file location, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vitrine").join(CONFIG_FILE))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let layer = read_layer(path)?;
        Self::from_value(layer, path)
    }

    /// Merge the user config (skipped when missing) and `explicit` (must
    /// exist) over the defaults.
    pub fn load_layered(user: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut merged = Value::Object(Default::default());
        let mut last = PathBuf::from("<defaults>");

        if let Some(path) = user {
            if path.is_file() {
                merge_json(&mut merged, &read_layer(path)?);
                last = path.to_path_buf();
            } else {
                tracing::debug!("No user config at {}", path.display());
            }
        }
        if let Some(path) = explicit {
            merge_json(&mut merged, &read_layer(path)?);
            last = path.to_path_buf();
        }

        let config = Self::from_value(merged, &last)?;
        tracing::debug!(
            "Loaded config: default theme {}, {} tenants",
            config.default_theme,
            config.tenants.len()
        );
        Ok(config)
    }

    fn from_value(value: Value, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn read_layer(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(Value::String(dir)) = value.get("themes_dir") {
        let dir = Path::new(dir);
        if dir.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            let resolved = base.join(dir).to_string_lossy().into_owned();
            value["themes_dir"] = Value::String(resolved);
        }
    }
    Ok(value)
}

//! TOML-based application configuration.
//!
//! Stores:
//! - Backend API location
//! - Finalization rules
//! - Default output format for the CLI
//!
//! Configuration is stored at `~/.config/oneonone/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on pages followed when listing calendars.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

/// Finalization configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeConfig {
    /// How many days before today a meeting may still be finalized.
    #[serde(default = "default_allow_days_in_past")]
    pub allow_days_in_past: u32,
}

/// CLI output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/oneonone/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub finalize: FinalizeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".into()
}
fn default_max_pages() -> u32 {
    50
}
fn default_allow_days_in_past() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_pages: default_max_pages(),
        }
    }
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self {
            allow_days_in_past: default_allow_days_in_past(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
            ),
            serde_json::Value::Number(_) => value
                .parse::<u64>()
                .map(|n| serde_json::Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                return Err(invalid("cannot replace a whole section".into()));
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            Ok(cfg)
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        toml::from_str(&content).map_err(|e| load_failed(e.to_string()))
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse as
    /// the existing value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        let mut json = serde_json::to_value(&*self).map_err(|e| invalid(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.finalize.allow_days_in_past, 1);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[output]\njson = true\n").unwrap();
        assert!(parsed.output.json);
        assert_eq!(parsed.api.base_url, "http://localhost:8000/api/");
    }

    #[test]
    fn get_and_set_by_dotted_key() {
        let mut cfg = Config::default();
        assert_eq!(cfg.get("finalize.allow_days_in_past").as_deref(), Some("1"));

        cfg.set("finalize.allow_days_in_past", "3").unwrap();
        cfg.set("output.json", "true").unwrap();
        cfg.set("api.base_url", "https://1on1.example/api/").unwrap();
        assert_eq!(cfg.finalize.allow_days_in_past, 3);
        assert!(cfg.output.json);
        assert_eq!(cfg.get("api.base_url").as_deref(), Some("https://1on1.example/api/"));
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(matches!(cfg.set("api.nope", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(cfg.set("", "1"), Err(ConfigError::UnknownKey(_))));
        assert!(matches!(
            cfg.set("output.json", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(cfg.set("api", "x"), Err(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_and_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.api.max_pages = 3;
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_reports_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = [").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::LoadFailed { .. })));
    }
}

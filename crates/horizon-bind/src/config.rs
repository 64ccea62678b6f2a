//! Settings for the binding layer.
//!
//! Settings are plain serde structs and load from TOML. Every key is
//! optional; missing keys keep their defaults.
//!
//! ```toml
//! locale = "de-DE"
//! century_pivot = 40
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use horizon_bind_core::logging::targets;

use crate::format::DEFAULT_CENTURY_PIVOT;

/// Errors raised while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("settings file '{}': {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML or has mistyped keys.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for settings operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Binding-layer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindSettings {
    /// Locale identifier for date names, e.g. `en-US` or `fr`.
    pub locale: String,
    /// Two-digit years below this value are 20xx, the rest 19xx.
    pub century_pivot: i32,
}

impl Default for BindSettings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            century_pivot: DEFAULT_CENTURY_PIVOT,
        }
    }
}

impl BindSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            locale = %settings.locale,
            century_pivot = settings.century_pivot,
            "loaded settings"
        );
        Ok(settings)
    }

    /// Renders the settings as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the settings to a TOML file.
    pub fn save_toml(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = BindSettings::default();
        assert_eq!(settings.locale, "en");
        assert_eq!(settings.century_pivot, 30);
        assert_eq!(BindSettings::from_toml_str("").unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = BindSettings::from_toml_str("locale = \"fr-FR\"").unwrap();
        assert_eq!(settings.locale, "fr-FR");
        assert_eq!(settings.century_pivot, 30);
    }

    #[test]
    fn test_mistyped_key_is_a_parse_error() {
        let err = BindSettings::from_toml_str("century_pivot = \"thirty\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bind.toml");

        let settings = BindSettings {
            locale: "de-AT".into(),
            century_pivot: 45,
        };
        settings.save_toml(&path).unwrap();
        assert_eq!(BindSettings::load_toml(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = BindSettings::load_toml(dir.path().join("absent.toml")).unwrap_err();
        match err {
            ConfigError::Io { path, source } => {
                assert!(path.ends_with("absent.toml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}

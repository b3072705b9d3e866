//! Configuration Management

use crate::dataset::layout::DEFAULT_SPLIT_FILE;
use crate::sample::action::{Normalizer, COORDINATE_SCALE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Raw dataset settings
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Coordinate normalization settings
    #[serde(default)]
    pub normalization: NormalizationConfig,
}

/// Raw dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Dataset checkout root (required by commands unless given on the command line)
    pub root: Option<PathBuf>,
    /// Split file, relative to the root
    pub split_file: String,
    /// Splits converted when none are named
    pub splits: Vec<String>,
    /// Episodes processed per split (unset = all)
    pub limit_episodes: Option<usize>,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported datasets are written to
    pub output_dir: PathBuf,
    /// Datasets are named `<prefix>-<split>`
    pub name_prefix: String,
    /// Replace existing datasets of the same name
    pub overwrite: bool,
}

/// Normalization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Size of the raw coordinate grid
    pub coordinate_scale: f64,
    /// Warn about coordinates outside the grid
    pub warn_out_of_range: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: None,
            split_file: DEFAULT_SPLIT_FILE.to_string(),
            splits: vec!["train".to_string(), "test".to_string()],
            limit_episodes: None,
        }
    }
}

impl DatasetConfig {
    /// Episode limit from the command line, falling back to the configured one
    pub fn limit_or(&self, limit: Option<usize>) -> Option<usize> {
        limit.or(self.limit_episodes)
    }

    /// Split file from the command line, falling back to the configured one
    pub fn split_file_or(&self, split_file: Option<String>) -> String {
        split_file.unwrap_or_else(|| self.split_file.clone())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: Config::base_dir().join("datasets"),
            name_prefix: "gui-odyssey".to_string(),
            overwrite: true,
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            coordinate_scale: COORDINATE_SCALE,
            warn_out_of_range: true,
        }
    }
}

impl NormalizationConfig {
    pub fn normalizer(&self) -> Normalizer {
        Normalizer {
            scale: self.coordinate_scale,
            warn_out_of_range: self.warn_out_of_range,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.dataset.split_file.trim().is_empty() {
            return Err(crate::Error::Config("split_file must not be empty".to_string()));
        }
        if self.dataset.splits.is_empty() {
            return Err(crate::Error::Config("splits must name at least one split".to_string()));
        }
        if self.export.name_prefix.trim().is_empty() {
            return Err(crate::Error::Config("name_prefix must not be empty".to_string()));
        }
        let scale = self.normalization.coordinate_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(crate::Error::Config(format!(
                "coordinate_scale must be a positive number, got {}",
                scale
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Directory holding the config file and default exports
    pub fn base_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gui_odyssey"))
            .unwrap_or_else(|| PathBuf::from(".gui_odyssey"))
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        Self::base_dir().join("config.toml")
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Look up a value by dotted key, e.g. `export.name_prefix`
    pub fn get(&self, key: &str) -> Result<Option<toml::Value>, crate::Error> {
        let mut value = toml::Value::try_from(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        for part in key.split('.') {
            value = match value {
                toml::Value::Table(mut table) => match table.remove(part) {
                    Some(v) => v,
                    None => return Ok(None),
                },
                _ => return Ok(None),
            };
        }
        Ok(Some(value))
    }
}

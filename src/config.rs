//! CLI Configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Dashboard API base URL
pub const DEFAULT_API_URL: &str = "https://api.meraki.com/api/v1";

/// File written by the export step when the operator does not rename it
pub const DEFAULT_EXPORT_FILENAME: &str = "nac_license_usage.xlsx";

/// Persisted profile. The API key is deliberately absent.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub output_file: Option<String>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, profile: Option<&str>) -> Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "api_url" => self.api_url = Some(value),
            "output_file" => self.output_file = Some(value),
            "default_format" => self.default_format = Some(value),
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        let value = match key {
            "api_url" => self.api_url.as_deref(),
            "output_file" => self.output_file.as_deref(),
            "default_format" => self.default_format.as_deref(),
            _ => return Err(Error::Config(format!("Unknown config key: {}", key))),
        };
        Ok(value)
    }

    pub const KEYS: [&'static str; 3] = ["api_url", "output_file", "default_format"];

    fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| Error::Config("Cannot find home directory".into()))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".nac-usage").join(filename))
    }
}

/// Where the exporter writes and what it calls the file by default
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub default_filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            default_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api_url", "https://api.meraki.ca/api/v1".into()).unwrap();
        config.set("output_file", "usage.xlsx".into()).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get("api_url").unwrap(), Some("https://api.meraki.ca/api/v1"));
        assert_eq!(loaded.get("output_file").unwrap(), Some("usage.xlsx"));
        assert_eq!(loaded.get("default_format").unwrap(), None);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        assert!(matches!(config.set("api_key", "x".into()), Err(Error::Config(_))));
        assert!(config.get("tenant_id").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_export_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.default_filename, "nac_license_usage.xlsx");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}

//! Configuration handling for the kiosk

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the kiosk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KioskConfig {
    /// Lead submission endpoint (HTTP POST, JSON)
    pub endpoint: Option<String>,
    /// Analytics collector endpoint; events are log-only when unset
    pub analytics_endpoint: Option<String>,
}

impl KioskConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "leadform", "leadform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file. On first run the
    /// defaults are written out so there is a file to edit.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: KioskConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }

        let config = Self::default();
        if let Err(err) = config.save_to(path) {
            // Read-only config dirs still get a working kiosk
            tracing::debug!("could not write default config: {err}");
        }
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("leadform-tui-test-{}-{tag}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = KioskConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.analytics_endpoint.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = KioskConfig {
            endpoint: Some("https://example.com/api/contact".to_string()),
            analytics_endpoint: Some("https://example.com/events".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: KioskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint, config.endpoint);
        assert_eq!(parsed.analytics_endpoint, config.analytics_endpoint);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: KioskConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "https://x.test/c", "unknown_field": "value"}"#;
        let parsed: KioskConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, Some("https://x.test/c".to_string()));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let path = temp_config_path("first-run");

        let config = KioskConfig::load_from(&path).unwrap();
        assert!(config.endpoint.is_none());
        assert!(path.exists());

        // The written file loads back as the same defaults
        let reloaded = KioskConfig::load_from(&path).unwrap();
        assert!(reloaded.endpoint.is_none());
        assert!(reloaded.analytics_endpoint.is_none());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_load_reads_existing_file() {
        let path = temp_config_path("existing");
        let config = KioskConfig {
            endpoint: Some("https://example.com/api/contact".to_string()),
            analytics_endpoint: None,
        };
        config.save_to(&path).unwrap();

        let loaded = KioskConfig::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint, config.endpoint);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Application settings loaded from a TOML file.
///
/// Everything here has a working default; a missing file or missing key is
/// not an error at the engine level, only a malformed file is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Organization name shown in report headers
    pub organization: String,
    /// Seed value for a new snapshot's average stay length, in days
    pub default_average_stay_days: f64,
    /// Seed value for a new snapshot's growth threshold coefficient
    pub default_growth_threshold: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization: "Urban Planning Institute".to_string(),
            default_average_stay_days: 1.0,
            default_growth_threshold: 1.0,
        }
    }
}

impl AppConfig {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ForecastError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load settings from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ForecastError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.organization, "Urban Planning Institute");
        assert_eq!(config.default_average_stay_days, 1.0);
        assert_eq!(config.default_growth_threshold, 1.0);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "organization = \"City Planning Office\"\n\
             default_average_stay_days = 2.5\n\
             default_growth_threshold = 1.2\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.organization, "City Planning Office");
        assert_eq!(config.default_average_stay_days, 2.5);
        assert_eq!(config.default_growth_threshold, 1.2);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "organization = \"Metro Region\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.organization, "Metro Region");
        assert_eq!(config.default_average_stay_days, 1.0);
    }

    #[test]
    fn test_load_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "organization = [unclosed\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(AppConfig::load("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn test_load_or_default_none() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = AppConfig {
            organization: "Test Org".to_string(),
            default_average_stay_days: 3.0,
            default_growth_threshold: 0.9,
        };
        let serialized = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(back, config);
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::map::LatLng;

/// Initial viewport for the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 33.7756222,
            center_lng: -84.398479,
            zoom: 13,
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LatLng {
        LatLng::new(self.center_lat, self.center_lng)
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// URL of the lookup endpoint that resolves a location to weather data.
    pub endpoint: Option<String>,

    /// Example TOML:
    /// [map]
    /// center_lat = 33.7756222
    /// center_lng = -84.398479
    /// zoom = 13
    #[serde(default)]
    pub map: MapConfig,
}

impl Config {
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn set_endpoint(&mut self, url: String) {
        self.endpoint = Some(url);
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathermap", "weathermap")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_endpoint_and_the_home_viewport() {
        let cfg = Config::default();

        assert!(cfg.endpoint().is_none());
        assert_eq!(cfg.map.center(), LatLng::new(33.7756222, -84.398479));
        assert_eq!(cfg.map.zoom, 13);
    }

    #[test]
    fn set_endpoint_round_trips() {
        let mut cfg = Config::default();
        cfg.set_endpoint("https://example.test/exec".to_string());

        assert_eq!(cfg.endpoint(), Some("https://example.test/exec"));
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let mut cfg = Config::default();
        cfg.set_endpoint("https://example.test/exec".to_string());
        cfg.map.zoom = 9;

        let encoded = toml::to_string_pretty(&cfg).unwrap();
        let decoded: Config = toml::from_str(&encoded).unwrap();

        assert_eq!(decoded.endpoint(), Some("https://example.test/exec"));
        assert_eq!(decoded.map.zoom, 9);
    }

    #[test]
    fn map_table_is_optional_in_stored_config() {
        let decoded: Config = toml::from_str("endpoint = \"https://example.test\"").unwrap();

        assert_eq!(decoded.endpoint(), Some("https://example.test"));
        assert_eq!(decoded.map.zoom, 13);
    }
}

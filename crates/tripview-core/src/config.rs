//! Configuration models.
//!
//! `RootConfig` mirrors `config.toml`; every field is optional in the file.
//! `SecretConfig` mirrors `secret.json` and only carries the map credential.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripviewError};
use crate::trip::Coords;
use crate::view::{DEFAULT_CENTER, DEFAULT_ZOOM};

/// Relative location of the trip document when nothing else is configured.
pub const DEFAULT_TRIP_LOCATION: &str = "mock-trip.json";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RootConfig {
    pub trip: TripSourceConfig,
    pub map: MapConfig,
}

/// Where the trip document lives.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TripSourceConfig {
    /// Document path or URL. Relative paths are resolved against `base_url`
    /// if set, otherwise against `asset_dir`.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,
}

impl Default for TripSourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_TRIP_LOCATION.to_string(),
            base_url: None,
            asset_dir: None,
        }
    }
}

/// A resolved trip document location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripLocation {
    Remote(String),
    File(PathBuf),
}

impl TripSourceConfig {
    pub fn resolve(&self) -> TripLocation {
        let location = self.location.trim();
        if is_http_url(location) {
            return TripLocation::Remote(location.to_string());
        }

        if let Some(base_url) = &self.base_url {
            return TripLocation::Remote(format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                location.trim_start_matches('/')
            ));
        }

        let dir = self.asset_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        TripLocation::File(dir.join(location))
    }
}

fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Map widget settings.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Center used for days without activities.
    pub default_center: Coords,
    pub zoom: u8,
}

impl MapConfig {
    /// Rejects a default center outside WGS84 bounds.
    pub fn validate(&self) -> Result<()> {
        if !self.default_center.is_valid() {
            return Err(TripviewError::config(format!(
                "[map] default_center ({}, {}) is out of range",
                self.default_center.lat, self.default_center.lng
            )));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Root configuration structure for secret.json
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapProviderConfig>,
}

/// Map provider credential
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MapProviderConfig {
    pub api_key: String,
}

impl SecretConfig {
    pub fn with_map_api_key(api_key: impl Into<String>) -> Self {
        Self {
            map: Some(MapProviderConfig {
                api_key: api_key.into(),
            }),
        }
    }

    /// The map credential, if present and not blank.
    pub fn map_api_key(&self) -> Option<&str> {
        self.map
            .as_ref()
            .map(|m| m.api_key.trim())
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.trip.location, "mock-trip.json");
        assert_eq!(config.map.zoom, 14);
        assert_eq!(config.map.default_center, DEFAULT_CENTER);
    }

    #[test]
    fn test_partial_toml() {
        let config: RootConfig = toml::from_str(
            r#"
            [trip]
            base_url = "https://example.com/static/"

            [map]
            zoom = 11
            default_center = { lat = 35.68, lng = 139.76 }
            "#,
        )
        .unwrap();
        assert_eq!(config.trip.location, DEFAULT_TRIP_LOCATION);
        assert_eq!(config.map.zoom, 11);
        assert_eq!(config.map.default_center, Coords::new(35.68, 139.76));
    }

    #[test]
    fn test_map_config_validation() {
        assert!(MapConfig::default().validate().is_ok());

        let config = MapConfig {
            default_center: Coords::new(500.0, -999.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TripviewError::Config(_)));
        assert!(err.to_string().contains("default_center"));
    }

    #[test]
    fn test_resolve_default_is_relative_file() {
        assert_eq!(
            TripSourceConfig::default().resolve(),
            TripLocation::File(PathBuf::from("./mock-trip.json"))
        );
    }

    #[test]
    fn test_resolve_asset_dir() {
        let config = TripSourceConfig {
            asset_dir: Some(PathBuf::from("/srv/trip")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve(),
            TripLocation::File(PathBuf::from("/srv/trip/mock-trip.json"))
        );
    }

    #[test]
    fn test_resolve_base_url_joins_once() {
        let config = TripSourceConfig {
            location: "/mock-trip.json".to_string(),
            base_url: Some("https://example.com/app/".to_string()),
            asset_dir: None,
        };
        assert_eq!(
            config.resolve(),
            TripLocation::Remote("https://example.com/app/mock-trip.json".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_url_wins() {
        let config = TripSourceConfig {
            location: "http://localhost:8080/trip.json".to_string(),
            base_url: Some("https://ignored.example".to_string()),
            asset_dir: None,
        };
        assert_eq!(
            config.resolve(),
            TripLocation::Remote("http://localhost:8080/trip.json".to_string())
        );
    }

    #[test]
    fn test_map_api_key() {
        assert_eq!(SecretConfig::default().map_api_key(), None);
        assert_eq!(SecretConfig::with_map_api_key("  ").map_api_key(), None);
        assert_eq!(
            SecretConfig::with_map_api_key("abc123").map_api_key(),
            Some("abc123")
        );

        let parsed: SecretConfig =
            serde_json::from_str(r#"{"map":{"api_key":"k"}}"#).unwrap();
        assert_eq!(parsed.map_api_key(), Some("k"));
    }
}

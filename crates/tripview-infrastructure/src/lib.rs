pub mod config_service;
pub mod file_trip_source;
pub mod http_trip_source;
pub mod paths;
pub mod secret_service;

pub use crate::config_service::ConfigService;
pub use crate::file_trip_source::FileTripSource;
pub use crate::http_trip_source::HttpTripSource;
pub use crate::secret_service::{MAP_API_KEY_ENV, SecretServiceImpl};

use std::sync::Arc;

use tripview_core::config::{TripLocation, TripSourceConfig};
use tripview_core::trip::TripSource;

/// Builds the trip source matching the configured location.
pub fn trip_source_from_config(config: &TripSourceConfig) -> Arc<dyn TripSource> {
    match config.resolve() {
        TripLocation::Remote(url) => Arc::new(HttpTripSource::new(url)),
        TripLocation::File(path) => Arc::new(FileTripSource::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        let remote = trip_source_from_config(&TripSourceConfig {
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(remote.location(), "https://example.com/mock-trip.json");

        let local = trip_source_from_config(&TripSourceConfig::default());
        assert!(local.location().ends_with("mock-trip.json"));
        assert!(!local.location().starts_with("http"));
    }
}

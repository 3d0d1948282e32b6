//! One-shot trip loader.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tripview_core::trip::{Trip, TripSource};
use tripview_core::view::LoadState;

/// Retrieves the trip document at most once.
///
/// The first `load` call performs the fetch; every later call, including
/// concurrent ones, gets the same settled outcome. Failures are not retried.
pub struct TripLoader {
    source: Arc<dyn TripSource>,
    outcome: OnceCell<LoadState>,
}

impl TripLoader {
    pub fn new(source: Arc<dyn TripSource>) -> Self {
        Self {
            source,
            outcome: OnceCell::new(),
        }
    }

    /// Loads the trip, or returns the outcome of the earlier attempt.
    ///
    /// Never returns `LoadState::Loading`.
    pub async fn load(&self) -> LoadState {
        self.outcome
            .get_or_init(|| self.fetch_once())
            .await
            .clone()
    }

    /// Current state without triggering a fetch.
    pub fn state(&self) -> LoadState {
        self.outcome.get().cloned().unwrap_or(LoadState::Loading)
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    async fn fetch_once(&self) -> LoadState {
        let location = self.source.location();
        tracing::info!("[TripLoader] Fetching trip document from {}", location);

        let parsed = match self.source.fetch().await {
            Ok(body) => Trip::from_json(&body),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(trip) => {
                tracing::info!(
                    "[TripLoader] Loaded '{}' with {} day(s)",
                    trip.trip_title,
                    trip.days.len()
                );
                LoadState::Loaded(Arc::new(trip))
            }
            Err(e) => {
                if e.is_malformed() {
                    tracing::error!("[TripLoader] Rejected document from {}: {}", location, e);
                } else {
                    tracing::error!("[TripLoader] Could not retrieve {}: {}", location, e);
                }
                LoadState::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

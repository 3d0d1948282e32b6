//! Error types for the Tripview application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trip::{ActivityId, DayId};

/// A shared error type for the entire Tripview application.
///
/// Fetch and malformed-document failures are kept apart here so logs can tell
/// them apart, but both collapse into the same error screen for the user.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TripviewError {
    /// The trip document could not be retrieved (transport error or non-success response)
    #[error("Failed to fetch trip data: {message}")]
    Fetch { message: String },

    /// The trip document was retrieved but is not a well-formed trip
    #[error("Malformed trip data: {message}")]
    Malformed { message: String },

    /// A day was selected that is not part of the loaded trip
    #[error("Day {day_id} is not part of the loaded trip")]
    UnknownDay { day_id: DayId },

    /// A hovered activity that is not listed for the active day
    #[error("Activity {activity_id} is not part of the active day")]
    UnknownActivity { activity_id: ActivityId },

    /// An interaction arrived before the trip was ready
    #[error("Trip is not ready for interaction")]
    NotReady,

    /// The map widget could not be initialised
    #[error("Map provider error: {0}")]
    MapProvider(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TripviewError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Creates a Malformed error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a MapProvider error
    pub fn map_provider(message: impl Into<String>) -> Self {
        Self::MapProvider(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Check if this is a Malformed error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TripviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for TripviewError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TripviewError>`.
pub type Result<T> = std::result::Result<T, TripviewError>;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripviewError};

/// Identifier of an activity, unique within a trip.
pub type ActivityId = i64;

/// Identifier of a day, unique within a trip.
pub type DayId = i64;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both axes are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single stop on the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub photo_url: String,
    pub coords: Coords,
}

/// One day of the trip. Activities are kept in itinerary order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    pub title: String,
    pub activities: Vec<Activity>,
}

impl Day {
    /// Finds an activity of this day by id.
    pub fn activity(&self, activity_id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }

    /// Label used by the day list, e.g. "Day 1: Ancient Rome".
    pub fn label(&self) -> String {
        format!("Day {}: {}", self.id, self.title)
    }
}

/// The whole trip document.
///
/// Loaded once per session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub trip_title: String,
    pub days: Vec<Day>,
}

impl Trip {
    /// Parses and validates a trip document.
    ///
    /// The document is rejected as a whole on the first problem found; there is
    /// no field-by-field recovery.
    pub fn from_json(body: &str) -> Result<Self> {
        let trip: Trip = serde_json::from_str(body)
            .map_err(|e| TripviewError::malformed(e.to_string()))?;
        trip.validate()?;
        Ok(trip)
    }

    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut day_ids = HashSet::new();
        let mut activity_ids = HashSet::new();

        for day in &self.days {
            if !day_ids.insert(day.id) {
                return Err(TripviewError::malformed(format!(
                    "Duplicate day id {}",
                    day.id
                )));
            }

            for activity in &day.activities {
                if !activity_ids.insert(activity.id) {
                    return Err(TripviewError::malformed(format!(
                        "Duplicate activity id {}",
                        activity.id
                    )));
                }
                if activity.name.trim().is_empty() {
                    return Err(TripviewError::malformed(format!(
                        "Activity {} has an empty name",
                        activity.id
                    )));
                }
                if !activity.coords.is_valid() {
                    return Err(TripviewError::malformed(format!(
                        "Activity {} has out-of-range coordinates ({}, {})",
                        activity.id, activity.coords.lat, activity.coords.lng
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_day(&self) -> Option<&Day> {
        self.days.first()
    }

    pub fn day(&self, day_id: DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn contains_day(&self, day_id: DayId) -> bool {
        self.day(day_id).is_some()
    }
}

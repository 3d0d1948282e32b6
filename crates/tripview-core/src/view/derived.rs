//! Values derived from the selection for the map and the activity list.
//!
//! Nothing here is stored authoritatively; everything can be recomputed from
//! the trip, the active day and the hovered id.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::trip::{Activity, ActivityId, Coords, Day, DayId};

/// Center used when the active day has no activities (Rome).
pub const DEFAULT_CENTER: Coords = Coords::new(41.9028, 12.4964);

/// Fixed zoom level handed to the map widget.
pub const DEFAULT_ZOOM: u8 = 14;

/// Per-axis arithmetic mean of the activity coordinates.
///
/// Falls back to `fallback` for an empty slice instead of dividing by zero.
/// No projection or antimeridian handling: the map widget does that.
pub fn map_center(activities: &[Activity], fallback: Coords) -> Coords {
    if activities.is_empty() {
        return fallback;
    }

    let n = activities.len() as f64;
    let (sum_lat, sum_lng) = activities.iter().fold((0.0, 0.0), |(lat, lng), a| {
        (lat + a.coords.lat, lng + a.coords.lng)
    });

    Coords::new(sum_lat / n, sum_lng / n)
}

/// Visual style of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Normal,
    Highlighted,
}

impl MarkerStyle {
    pub fn from_highlighted(highlighted: bool) -> Self {
        if highlighted {
            Self::Highlighted
        } else {
            Self::Normal
        }
    }

    /// Fill colour of the pin.
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Normal => "#2196f3",
            Self::Highlighted => "#f44336",
        }
    }

    /// Highlighted pins bounce.
    pub fn animated(self) -> bool {
        matches!(self, Self::Highlighted)
    }
}

/// One marker as handed to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerState {
    pub activity_id: ActivityId,
    pub coords: Coords,
    pub label: String,
    pub highlighted: bool,
}

impl MarkerState {
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle::from_highlighted(self.highlighted)
    }
}

/// Markers for a day's activities, in itinerary order.
///
/// Ids are unique within a trip, so at most one marker is highlighted.
pub fn marker_states(activities: &[Activity], hovered: Option<ActivityId>) -> Vec<MarkerState> {
    activities
        .iter()
        .map(|a| MarkerState {
            activity_id: a.id,
            coords: a.coords,
            label: a.name.clone(),
            highlighted: hovered == Some(a.id),
        })
        .collect()
}

/// Everything the map widget needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    pub center: Coords,
    pub zoom: u8,
    pub markers: Vec<MarkerState>,
}

impl MapScene {
    pub fn highlighted(&self) -> Option<&MarkerState> {
        self.markers.iter().find(|m| m.highlighted)
    }
}

/// Builds map scenes, memoising the center per active day.
///
/// The center only depends on the day's activities, so hover changes reuse
/// the cached value and never move the map.
#[derive(Debug, Clone)]
pub struct MapViewModel {
    default_center: Coords,
    zoom: u8,
    cached_center: Option<(DayId, Coords)>,
    center_computations: usize,
}

impl MapViewModel {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            default_center: config.default_center,
            zoom: config.zoom,
            cached_center: None,
            center_computations: 0,
        }
    }

    /// Center for `day`, recomputed only when the day differs from the last call.
    pub fn center_for(&mut self, day: &Day) -> Coords {
        if let Some((day_id, center)) = self.cached_center
            && day_id == day.id
        {
            return center;
        }

        let center = map_center(&day.activities, self.default_center);
        self.cached_center = Some((day.id, center));
        self.center_computations += 1;
        tracing::debug!(
            "[MapViewModel] Center for day {} -> ({}, {}), computation #{}",
            day.id,
            center.lat,
            center.lng,
            self.center_computations
        );
        center
    }

    pub fn scene(&mut self, day: &Day, hovered: Option<ActivityId>) -> MapScene {
        MapScene {
            center: self.center_for(day),
            zoom: self.zoom,
            markers: marker_states(&day.activities, hovered),
        }
    }

    /// Number of times the center was actually computed.
    pub fn center_computations(&self) -> usize {
        self.center_computations
    }
}

impl Default for MapViewModel {
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}

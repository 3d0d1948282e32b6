//! Presentation boundary.
//!
//! Turns the session into plain view models for a front-end and wraps the
//! external map widget. Nothing in here is authoritative state: every render
//! starts again from the session.

use serde::Serialize;
use tripview_core::Result;
use tripview_core::TripviewError;
use tripview_core::trip::{ActivityId, Day, DayId, Trip};
use tripview_core::view::{MapScene, ViewPhase};

use crate::session::TripSession;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No trip data available";
pub const MAP_LOADING_MESSAGE: &str = "Loading map...";
pub const MAP_FAILED_MESSAGE: &str =
    "Failed to load the map. Please check your internet connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayButtonView {
    pub day_id: DayId,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCardView {
    pub activity_id: ActivityId,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub highlighted: bool,
}

/// Day list plus the active day's activity cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub trip_title: String,
    pub days: Vec<DayButtonView>,
    pub activities_label: String,
    pub activities: Vec<ActivityCardView>,
}

impl SidebarView {
    fn build(trip: &Trip, active: &Day, hovered: Option<ActivityId>) -> Self {
        Self {
            trip_title: trip.trip_title.clone(),
            days: trip
                .days
                .iter()
                .map(|day| DayButtonView {
                    day_id: day.id,
                    label: day.label(),
                    active: day.id == active.id,
                })
                .collect(),
            activities_label: format!("Activities for Day {}", active.id),
            activities: active
                .activities
                .iter()
                .map(|a| ActivityCardView {
                    activity_id: a.id,
                    name: a.name.clone(),
                    description: a.description.clone(),
                    photo_url: a.photo_url.clone(),
                    photo_alt: format!("View of {}", a.name),
                    highlighted: hovered == Some(a.id),
                })
                .collect(),
        }
    }
}

/// What the whole viewer shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Loading,
    Error { message: String },
    Empty,
    Ready { sidebar: SidebarView, map: MapScene },
}

impl Screen {
    /// Status line for the non-ready screens.
    pub fn status_message(&self) -> Option<String> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE.to_string()),
            Self::Error { message } => Some(format!("Error loading data: {message}")),
            Self::Empty => Some(EMPTY_MESSAGE.to_string()),
            Self::Ready { .. } => None,
        }
    }
}

/// Builds screens from a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    pub fn present(&self, session: &mut TripSession) -> Screen {
        match session.phase().clone() {
            ViewPhase::Loading => Screen::Loading,
            ViewPhase::Error { message } => Screen::Error { message },
            ViewPhase::EmptyReady => Screen::Empty,
            ViewPhase::Ready => {
                let hovered = session.selection().hovered_activity();
                let sidebar = match (session.trip(), session.active_day()) {
                    (Some(trip), Some(day)) => SidebarView::build(trip, day, hovered),
                    // Ready always has an active day once start() returned.
                    _ => return Screen::Loading,
                };
                match session.map_scene() {
                    Some(map) => Screen::Ready { sidebar, map },
                    None => Screen::Loading,
                }
            }
        }
    }
}

/// The external map-rendering widget.
pub trait MapWidget {
    /// Prepares the widget with the provider credential.
    fn initialize(&mut self, api_key: &str) -> Result<()>;

    /// Draws the markers around `scene.center` at `scene.zoom`.
    fn render(&mut self, scene: &MapScene) -> Result<()>;
}

/// State of the map region of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapRegion {
    Loading,
    Rendered,
    Unavailable { message: String },
}

impl MapRegion {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(MAP_LOADING_MESSAGE),
            Self::Rendered => None,
            Self::Unavailable { message } => Some(message.as_str()),
        }
    }
}

/// Owns the map widget and keeps its failures inside the map region.
///
/// A missing credential or a failing widget never affects the sidebar or the
/// session.
pub struct MapPanel<W: MapWidget> {
    widget: W,
    region: MapRegion,
}

impl<W: MapWidget> MapPanel<W> {
    pub fn new(mut widget: W, api_key: Option<&str>) -> Self {
        let region = match api_key {
            None => {
                let err = TripviewError::map_provider("no map credential configured");
                tracing::warn!("[MapPanel] {}", err);
                MapRegion::Unavailable {
                    message: MAP_FAILED_MESSAGE.to_string(),
                }
            }
            Some(key) => match widget.initialize(key) {
                Ok(()) => MapRegion::Loading,
                Err(e) => {
                    tracing::warn!("[MapPanel] Map widget failed to initialize: {}", e);
                    MapRegion::Unavailable {
                        message: MAP_FAILED_MESSAGE.to_string(),
                    }
                }
            },
        };
        Self { widget, region }
    }

    /// Renders the scene unless the widget already failed.
    pub fn draw(&mut self, scene: &MapScene) -> &MapRegion {
        if matches!(self.region, MapRegion::Unavailable { .. }) {
            return &self.region;
        }

        self.region = match self.widget.render(scene) {
            Ok(()) => MapRegion::Rendered,
            Err(e) => {
                tracing::warn!("[MapPanel] Map render failed: {}", e);
                MapRegion::Unavailable {
                    message: MAP_FAILED_MESSAGE.to_string(),
                }
            }
        };
        &self.region
    }

    pub fn region(&self) -> &MapRegion {
        &self.region
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }
}

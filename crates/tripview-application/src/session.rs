//! The viewing session: one trip, one selection, one map view.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;
use tripview_core::config::MapConfig;
use tripview_core::selection::{SelectionEvent, SelectionState};
use tripview_core::trip::{ActivityId, Day, DayId, Trip};
use tripview_core::view::{LoadState, MapScene, MapViewModel, ViewPhase};
use tripview_core::{Result, TripviewError};

use crate::loader::TripLoader;

const EVENT_CAPACITY: usize = 64;

/// Notifications published to session subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// The top-level phase left `Loading`.
    PhaseChanged(ViewPhase),
    /// The active day or hovered activity changed.
    Selection(SelectionEvent),
}

/// State container owned by the front-end for the whole viewing session.
///
/// All mutation goes through `&mut self`, so events are applied strictly in
/// arrival order without locking. Observers subscribe with [`TripSession::subscribe`]
/// and only see real transitions.
pub struct TripSession {
    loader: TripLoader,
    phase: ViewPhase,
    trip: Option<Arc<Trip>>,
    selection: SelectionState,
    map_view: MapViewModel,
    events: broadcast::Sender<SessionEvent>,
}

impl TripSession {
    pub fn new(loader: TripLoader, map_config: &MapConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            loader,
            phase: ViewPhase::Loading,
            trip: None,
            selection: SelectionState::new(),
            map_view: MapViewModel::new(map_config),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Loads the trip and settles the session.
    ///
    /// Moves the phase out of `Loading` and, for a non-empty trip, selects the
    /// first day. Calling it again after it settled changes nothing.
    pub async fn start(&mut self) -> &ViewPhase {
        if self.phase != ViewPhase::Loading {
            return &self.phase;
        }

        let state = self.loader.load().await;
        self.transition(ViewPhase::from_load_state(&state));

        if let LoadState::Loaded(trip) = state {
            if let Some(event) = self.selection.bootstrap(&trip) {
                self.publish(SessionEvent::Selection(event));
            }
            self.trip = Some(trip);
        }

        &self.phase
    }

    /// Selects a day of the loaded trip.
    ///
    /// Returns `Ok(true)` if the active day changed, `Ok(false)` if it was
    /// already active.
    ///
    /// # Errors
    ///
    /// - `TripviewError::NotReady` before the session reached `Ready`
    /// - `TripviewError::UnknownDay` for a day outside the trip
    pub fn select_day(&mut self, day_id: DayId) -> Result<bool> {
        let trip = self.ready_trip()?;
        match self.selection.select_day(&trip, day_id)? {
            Some(event) => {
                tracing::debug!("[TripSession] Active day -> {}", day_id);
                self.publish(SessionEvent::Selection(event));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Records pointer enter/leave on an activity. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// - `TripviewError::NotReady` before the session reached `Ready`
    /// - `TripviewError::UnknownActivity` for an activity not shown for the
    ///   active day; the hover is left untouched
    pub fn hover_activity(&mut self, activity_id: Option<ActivityId>) -> Result<bool> {
        let trip = self.ready_trip()?;
        if let Some(id) = activity_id
            && self
                .selection
                .active_day(&trip)
                .and_then(|day| day.activity(id))
                .is_none()
        {
            return Err(TripviewError::UnknownActivity { activity_id: id });
        }

        match self.selection.hover_activity(activity_id) {
            Some(event) => {
                self.publish(SessionEvent::Selection(event));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_deref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn active_day(&self) -> Option<&Day> {
        let trip = self.trip.as_deref()?;
        self.selection.active_day(trip)
    }

    /// Map scene for the active day, or `None` outside `Ready`.
    pub fn map_scene(&mut self) -> Option<MapScene> {
        let trip = self.trip.as_deref()?;
        let day = self.selection.active_day(trip)?;
        Some(self.map_view.scene(day, self.selection.hovered_activity()))
    }

    pub fn map_view(&self) -> &MapViewModel {
        &self.map_view
    }

    pub fn loader(&self) -> &TripLoader {
        &self.loader
    }

    fn ready_trip(&self) -> Result<Arc<Trip>> {
        if !self.phase.is_ready() {
            return Err(TripviewError::NotReady);
        }
        self.trip.clone().ok_or(TripviewError::NotReady)
    }

    fn transition(&mut self, next: ViewPhase) {
        if !self.phase.can_transition_to(&next) {
            tracing::warn!(
                "[TripSession] Ignoring transition {:?} -> {:?}",
                self.phase,
                next
            );
            return;
        }

        tracing::info!("[TripSession] Phase {:?} -> {:?}", self.phase, next);
        self.phase = next.clone();
        self.publish(SessionEvent::PhaseChanged(next));
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine; the session state is the source of truth.
        let _ = self.events.send(event);
    }
}

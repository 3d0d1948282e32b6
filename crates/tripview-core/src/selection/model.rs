use serde::{Deserialize, Serialize};

use super::SelectionEvent;
use crate::error::{Result, TripviewError};
use crate::trip::{ActivityId, Day, DayId, Trip};

/// In-memory selection for one viewing session.
///
/// Created with nothing selected. The active day is set once automatically by
/// [`SelectionState::bootstrap`] and afterwards only by [`SelectionState::select_day`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    active_day: Option<DayId>,
    hovered_activity: Option<ActivityId>,
    /// Set by the first `bootstrap` call, whatever its outcome.
    bootstrapped: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_day_id(&self) -> Option<DayId> {
        self.active_day
    }

    pub fn hovered_activity(&self) -> Option<ActivityId> {
        self.hovered_activity
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Resolves the active day against the trip it was selected from.
    pub fn active_day<'a>(&self, trip: &'a Trip) -> Option<&'a Day> {
        self.active_day.and_then(|id| trip.day(id))
    }

    /// Selects the first day of a freshly loaded trip.
    ///
    /// One-shot: only the first call can select anything. Later calls return
    /// `None` even if the selection was cleared or the trip handed in differs.
    pub fn bootstrap(&mut self, trip: &Trip) -> Option<SelectionEvent> {
        if self.bootstrapped {
            return None;
        }
        self.bootstrapped = true;

        if self.active_day.is_some() {
            return None;
        }

        let first = trip.first_day()?;
        self.active_day = Some(first.id);
        Some(SelectionEvent::DaySelected {
            day_id: first.id,
            initial: true,
        })
    }

    /// Makes `day_id` the active day.
    ///
    /// Re-selecting the active day is a no-op. Changing the day drops the
    /// hovered activity, since it belonged to the previous day's list.
    ///
    /// # Errors
    ///
    /// `TripviewError::UnknownDay` if the trip has no such day; the selection
    /// is left untouched.
    pub fn select_day(&mut self, trip: &Trip, day_id: DayId) -> Result<Option<SelectionEvent>> {
        if !trip.contains_day(day_id) {
            return Err(TripviewError::UnknownDay { day_id });
        }
        if self.active_day == Some(day_id) {
            return Ok(None);
        }

        self.active_day = Some(day_id);
        self.hovered_activity = None;
        Ok(Some(SelectionEvent::DaySelected {
            day_id,
            initial: false,
        }))
    }

    /// Records pointer enter (`Some(id)`) or leave (`None`).
    pub fn hover_activity(&mut self, activity_id: Option<ActivityId>) -> Option<SelectionEvent> {
        if self.hovered_activity == activity_id {
            return None;
        }
        self.hovered_activity = activity_id;
        Some(SelectionEvent::HoverChanged { activity_id })
    }
}

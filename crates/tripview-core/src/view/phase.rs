use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::trip::Trip;

/// Outcome of the single trip retrieval.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No outcome yet.
    Loading,
    /// Retrieval or parsing failed. Carries a human-readable message.
    Error { message: String },
    /// The parsed trip.
    Loaded(Arc<Trip>),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn trip(&self) -> Option<&Arc<Trip>> {
        match self {
            Self::Loaded(trip) => Some(trip),
            _ => None,
        }
    }
}

/// Top-level state of the viewer.
///
/// ```text
/// Loading ──fetch/parse failure──▶ Error       (terminal)
///    │──loaded, zero days───────▶ EmptyReady  (terminal)
///    └──loaded, ≥1 day──────────▶ Ready
/// ```
///
/// Day and hover changes happen inside `Ready` and never change the phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ViewPhase {
    Loading,
    Error { message: String },
    EmptyReady,
    Ready,
}

impl ViewPhase {
    pub fn from_load_state(state: &LoadState) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Error { message } => Self::Error {
                message: message.clone(),
            },
            LoadState::Loaded(trip) if trip.is_empty() => Self::EmptyReady,
            LoadState::Loaded(_) => Self::Ready,
        }
    }

    /// Whether a transition from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: &ViewPhase) -> bool {
        matches!(
            (self, next),
            (
                Self::Loading,
                Self::Error { .. } | Self::EmptyReady | Self::Ready
            )
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::EmptyReady)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Day;

    fn loaded(days: usize) -> LoadState {
        LoadState::Loaded(Arc::new(Trip {
            trip_title: "T".to_string(),
            days: (0..days)
                .map(|i| Day {
                    id: i as i64 + 1,
                    title: String::new(),
                    activities: vec![],
                })
                .collect(),
        }))
    }

    #[test]
    fn test_phase_from_load_state() {
        assert_eq!(ViewPhase::from_load_state(&LoadState::Loading), ViewPhase::Loading);
        assert_eq!(
            ViewPhase::from_load_state(&LoadState::Error {
                message: "boom".to_string()
            }),
            ViewPhase::Error {
                message: "boom".to_string()
            }
        );
        assert_eq!(ViewPhase::from_load_state(&loaded(0)), ViewPhase::EmptyReady);
        assert_eq!(ViewPhase::from_load_state(&loaded(2)), ViewPhase::Ready);
    }

    #[test]
    fn test_transitions_only_leave_loading() {
        let error = ViewPhase::Error {
            message: "x".to_string(),
        };
        assert!(ViewPhase::Loading.can_transition_to(&ViewPhase::Ready));
        assert!(ViewPhase::Loading.can_transition_to(&ViewPhase::EmptyReady));
        assert!(ViewPhase::Loading.can_transition_to(&error));

        assert!(!ViewPhase::Ready.can_transition_to(&ViewPhase::Loading));
        assert!(!ViewPhase::Ready.can_transition_to(&error));
        assert!(!error.can_transition_to(&ViewPhase::Ready));
        assert!(!ViewPhase::EmptyReady.can_transition_to(&ViewPhase::Ready));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(ViewPhase::EmptyReady.is_terminal());
        assert!(
            ViewPhase::Error {
                message: String::new()
            }
            .is_terminal()
        );
        assert!(!ViewPhase::Ready.is_terminal());
        assert!(!ViewPhase::Loading.is_terminal());
    }

    #[test]
    fn test_load_state_accessors() {
        assert!(!LoadState::Loading.is_settled());
        assert!(loaded(1).is_settled());
        assert!(loaded(1).trip().is_some());
        assert!(
            LoadState::Error {
                message: String::new()
            }
            .trip()
            .is_none()
        );
    }
}

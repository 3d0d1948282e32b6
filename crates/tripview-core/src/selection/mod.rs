//! Selection state module.
//!
//! Holds the two pieces of user-driven state: the active day and the hovered
//! activity.

mod event;
mod model;

pub use event::SelectionEvent;
pub use model::SelectionState;

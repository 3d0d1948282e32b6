//! Trip domain module.
//!
//! # Module Structure
//!
//! - `model`: The trip document (`Trip`, `Day`, `Activity`, `Coords`)
//! - `source`: Trait for retrieving the raw document (`TripSource`)

mod model;
mod source;

// Re-export public API
pub use model::{Activity, ActivityId, Coords, Day, DayId, Trip};
pub use source::TripSource;

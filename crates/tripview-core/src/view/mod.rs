//! View module.
//!
//! # Module Structure
//!
//! - `phase`: Top-level view state machine (`ViewPhase`, `LoadState`)
//! - `derived`: Map center and marker state derived from the selection

mod derived;
mod phase;

pub use derived::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MapScene, MapViewModel, MarkerState, MarkerStyle, map_center,
    marker_states,
};
pub use phase::{LoadState, ViewPhase};

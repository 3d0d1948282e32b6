pub mod loader;
pub mod presenter;
pub mod session;

pub use loader::TripLoader;
pub use presenter::{MapPanel, MapWidget, Presenter, Screen};
pub use session::{SessionEvent, TripSession};

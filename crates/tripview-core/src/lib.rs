pub mod config;
pub mod error;
pub mod secret;
pub mod selection;
pub mod trip;
pub mod view;

// Re-export common error type
pub use error::{Result, TripviewError};

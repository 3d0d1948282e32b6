//! Trip source trait.
//!
//! Defines the interface for retrieving the raw trip document.

use crate::error::Result;
use async_trait::async_trait;

/// A place the trip document can be retrieved from.
///
/// Implementations only move bytes: parsing and validation belong to the
/// loader so that transport and format failures surface through one path.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Map transport problems and non-success responses to `TripviewError::Fetch`
/// - Never retry on their own
#[async_trait]
pub trait TripSource: Send + Sync {
    /// Retrieves the raw trip document.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The document body
    /// - `Err(_)`: The document could not be retrieved
    async fn fetch(&self) -> Result<String>;

    /// Human-readable description of where the document comes from.
    fn location(&self) -> String;
}

//! The data source boundary.
//!
//! The view layer awaits these fetches once at load time; everything
//! downstream (resolution, filtering) is synchronous.

use thiserror::Error;

use super::fixtures;
use super::types::{
    ArtistRecord,
    SessionRecord,
};

/// A failed fetch from the backing store.
///
/// The view layer reacts by entering its empty/error display state; no
/// retry semantics are defined here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backing store rejected or failed the request.
    #[error("Backing store request failed: {0}")]
    Backend(String),
}

/// Supplies the record collections the listing surfaces render.
///
/// Implementations must return every record unfiltered; filtering is the
/// caller's concern and always derives a new collection.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetches all scheduled sessions.
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>, FetchError>;

    /// Fetches the artist directory.
    async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>, FetchError>;
}

/// A source backed by the built-in fixture data. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl CatalogSource for FixtureSource {
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>, FetchError> {
        tracing::debug!("Serving fixture sessions");
        Ok(fixtures::sample_sessions())
    }

    async fn fetch_artists(&self) -> Result<Vec<ArtistRecord>, FetchError> {
        tracing::debug!("Serving fixture artists");
        Ok(fixtures::sample_artists())
    }
}

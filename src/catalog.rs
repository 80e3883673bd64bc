//! The festival catalog: session and artist records and their source.
//!
//! Records are created by the data source at load time and stay immutable
//! for the lifetime of the view; filtering derives new collections and
//! never mutates them.

mod fixtures;
mod source;
mod types;

pub use fixtures::{
    sample_artists,
    sample_sessions,
};
pub use source::{
    CatalogSource,
    FetchError,
    FixtureSource,
};
pub use types::{
    ArtistRecord,
    ArtistRef,
    LocationRef,
    SessionCategory,
    SessionRecord,
};

//! Listing filters.
//!
//! Pure derivations from (records, filter state) to the collections the
//! program and artist surfaces render. Re-evaluated in full whenever either
//! input changes; record counts are small enough that nothing is cached.

mod apply;
mod state;

pub use apply::{
    collect_tags,
    day_offset,
    festival_epoch,
    filter_artists,
    filter_sessions,
};
pub use state::{
    ArtistTagFilter,
    DayBucket,
    FilterAction,
    SessionFilter,
};

//! Development-only sample-data seeding.
//!
//! One-shot bulk insert of fixture rows into a backing row store, in
//! dependency order. No rollback and no idempotence check: a failed insert
//! leaves earlier tables populated, and repeated runs duplicate rows.

mod fixtures;
mod runner;
mod store;

pub use runner::{
    SeedError,
    SeedSummary,
    seed_sample_data,
};
pub use store::{
    MemoryStore,
    RowId,
    RowStore,
    StoreError,
};

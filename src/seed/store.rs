//! The row store the seeder writes to.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Identity of an inserted row, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RowId(pub u64);

/// A failed store operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert was rejected by the store.
    #[error("Insert into table '{table}' failed: {message}")]
    Insert {
        /// The table the insert targeted.
        table: String,
        /// The underlying cause, as reported by the store.
        message: String,
    },
}

/// A generic table-shaped insert target.
///
/// The production deployment backs this with a hosted database; tests and
/// the dev binary use [`MemoryStore`]. Inserts return the assigned row ids
/// so dependent rows can reference them.
#[allow(async_fn_in_trait)]
pub trait RowStore {
    /// Appends `rows` to `table`, returning the assigned ids in order.
    ///
    /// # Errors
    /// - The store rejected the insert
    async fn insert(&mut self, table: &str, rows: Vec<Value>) -> Result<Vec<RowId>, StoreError>;
}

/// An in-process row store with sequential ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Rows per table, in insertion order.
    tables: HashMap<String, Vec<(RowId, Value)>>,

    /// Next id to assign, shared across tables.
    next_id: u64,
}

impl MemoryStore {
    /// Rows of one table, in insertion order. Empty for unknown tables.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<&Value> {
        self.tables
            .get(table)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|(_, row)| row)
            .collect()
    }

    /// Number of rows in one table.
    #[must_use]
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, Vec::len)
    }

    /// Consumes the store, yielding all tables keyed by name.
    #[must_use]
    pub fn into_tables(self) -> HashMap<String, Vec<Value>> {
        self.tables
            .into_iter()
            .map(|(table, rows)| (table, rows.into_iter().map(|(_, row)| row).collect()))
            .collect()
    }
}

impl RowStore for MemoryStore {
    async fn insert(&mut self, table: &str, rows: Vec<Value>) -> Result<Vec<RowId>, StoreError> {
        let entries = self.tables.entry(table.to_string()).or_default();
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            let id = RowId(self.next_id);
            self.next_id += 1;
            entries.push((id, row));
            ids.push(id);
        }
        tracing::debug!("Inserted {} rows into '{}'", ids.len(), table);
        Ok(ids)
    }
}

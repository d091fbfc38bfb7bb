//! Result persistence collaborator
//!
//! The pipeline itself never owns storage; callers hand it an explicit
//! [`ResultStore`] handle. Semantics are full clear-then-insert: every
//! successful computation replaces the previous row set wholesale, so the
//! last completed write wins when submissions overlap.

use crate::spectrum::FftDataRow;

/// Storage boundary consumed by the pipeline
///
/// Rows are keyed by `Freq` downstream; this trait only moves whole tables.
pub trait ResultStore {
    /// Drop any previous rows and store the new table
    fn clear_and_store(&mut self, rows: Vec<FftDataRow>);

    /// Whether a previously stored table exists
    fn has_stored_data(&self) -> bool;

    /// Read back the stored table, empty if nothing was stored
    fn load_all(&self) -> Vec<FftDataRow>;
}

/// In-memory store, sufficient for the CLI and for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<FftDataRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn clear_and_store(&mut self, rows: Vec<FftDataRow>) {
        self.rows = rows;
    }

    fn has_stored_data(&self) -> bool {
        !self.rows.is_empty()
    }

    fn load_all(&self) -> Vec<FftDataRow> {
        self.rows.clone()
    }
}

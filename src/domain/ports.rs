use crate::domain::model::ExportRecord;
use crate::utils::error::Result;

/// Persistence seam for ingested records. Production uses SQLite; tests
/// substitute an in-memory implementation.
pub trait RecordStore: Send {
    /// Inserts all records and commits once at the end. On error nothing
    /// from this batch is kept.
    fn insert_records(&mut self, records: &[ExportRecord]) -> Result<usize>;
}

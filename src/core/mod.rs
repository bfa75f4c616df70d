pub mod ingest;

pub use crate::domain::model::{ExportRecord, IngestSummary, RowOutcome, SkipReason};
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;

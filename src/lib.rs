pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::sqlite::SqliteStore;
pub use config::{CliConfig, StoreConfig};
pub use core::ingest::ingest_csv;
pub use domain::model::{ExportRecord, IngestSummary};
pub use utils::error::{IngestError, Result};

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zdexport-uploader")]
#[command(about = "Uploads CSV export files into a local SQLite store over HTTP")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_positive_number("port", self.port as usize, 1)?;
        Ok(())
    }
}

/// Storage settings handed to the initializer and the upload handler. The
/// defaults mirror the fixed layout of the export store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub table_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("data/zdexport.db"),
            table_name: "zendesk_export".to_string(),
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("db_path", &self.db_path.to_string_lossy())?;
        validation::validate_non_empty_string("table_name", &self.table_name)?;
        Ok(())
    }
}

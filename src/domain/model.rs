use serde::{Deserialize, Serialize};

/// Data columns of the export table, in upload order. The surrogate `sid`
/// key is generated by the store and never appears in an uploaded row.
pub const COLUMNS: [&str; 10] = [
    "ID",
    "Status",
    "Gruppe",
    "Mitarbeiter",
    "Aktualisierungsdatum",
    "Aktualisiert",
    "SLA",
    "Anfragender",
    "Angefragt",
    "Routing",
];

/// One row of the export schema. Only the external `id` is typed; the
/// remaining fields are stored as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: i64,
    pub status: String,
    pub gruppe: String,
    pub mitarbeiter: String,
    pub aktualisierungsdatum: String,
    pub aktualisiert: String,
    pub sla: String,
    pub anfragender: String,
    pub angefragt: String,
    pub routing: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ColumnCount { expected: usize, found: usize },
}

/// Result of classifying a single data row. Hard failures (e.g. a
/// non-numeric ID) abort the whole upload and are carried as errors instead.
#[derive(Debug)]
pub enum RowOutcome {
    Parsed(ExportRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: usize,
    pub skipped: usize,
}

impl IngestSummary {
    pub fn message(&self) -> String {
        format!(
            "CSV uploaded successfully, {} records inserted into the database",
            self.inserted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_message_reports_inserted_count() {
        let summary = IngestSummary {
            inserted: 3,
            skipped: 1,
        };
        assert!(summary.message().contains("3 records inserted"));
    }
}

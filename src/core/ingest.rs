use crate::core::{ExportRecord, IngestSummary, RecordStore, Result, RowOutcome, SkipReason};
use crate::domain::model::COLUMNS;
use crate::utils::error::IngestError;

pub const EXPECTED_FIELDS: usize = COLUMNS.len();

/// 分類單一資料列：欄位數不符就跳過，ID 無法轉成整數則整批失敗
pub fn classify_row(row: &csv::StringRecord) -> Result<RowOutcome> {
    if row.len() != EXPECTED_FIELDS {
        return Ok(RowOutcome::Skipped(SkipReason::ColumnCount {
            expected: EXPECTED_FIELDS,
            found: row.len(),
        }));
    }

    let id = row[0]
        .parse::<i64>()
        .map_err(|source| IngestError::IdCoercionError {
            value: row[0].to_string(),
            source,
        })?;

    Ok(RowOutcome::Parsed(ExportRecord {
        id,
        status: row[1].to_string(),
        gruppe: row[2].to_string(),
        mitarbeiter: row[3].to_string(),
        aktualisierungsdatum: row[4].to_string(),
        aktualisiert: row[5].to_string(),
        sla: row[6].to_string(),
        anfragender: row[7].to_string(),
        angefragt: row[8].to_string(),
        routing: row[9].to_string(),
    }))
}

/// Parses an uploaded CSV payload and writes every well-formed row into the
/// store. The first row is discarded as a header without validation. All
/// inserts happen in one batch with a single commit, so a failure anywhere
/// in the file leaves the store untouched.
pub fn ingest_csv<S: RecordStore>(store: &mut S, data: &[u8]) -> Result<IngestSummary> {
    // 解碼成 UTF-8 文字
    let text = String::from_utf8(data.to_vec())?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        match classify_row(&row)? {
            RowOutcome::Parsed(record) => records.push(record),
            RowOutcome::Skipped(SkipReason::ColumnCount { expected, found }) => {
                // line 1 is the header
                tracing::debug!(
                    "Skipping line {}: expected {} fields, found {}",
                    index + 2,
                    expected,
                    found
                );
                skipped += 1;
            }
        }
    }

    let inserted = store.insert_records(&records)?;

    Ok(IngestSummary { inserted, skipped })
}

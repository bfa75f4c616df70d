use crate::config::StoreConfig;
use crate::core::{ExportRecord, RecordStore, Result};
use crate::domain::model::COLUMNS;
use rusqlite::{params, Connection};
use std::fs;

/// SQLite-backed record store. A connection lives for the scope of one
/// request and is closed when the store is dropped.
pub struct SqliteStore {
    conn: Connection,
    table: String,
}

impl SqliteStore {
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = Connection::open(&config.db_path)?;
        Ok(Self {
            conn,
            table: config.table_name.clone(),
        })
    }

    /// Ensures the storage directory and the export table exist. Runs on
    /// every startup; existing rows are left untouched.
    pub fn init(config: &StoreConfig) -> Result<()> {
        if let Some(parent) = config.db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let store = Self::open(config)?;
        store.conn.execute_batch(&create_table_sql(&store.table))?;
        Ok(())
    }

    pub fn count_records(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }
}

fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            sid INTEGER PRIMARY KEY AUTOINCREMENT,
            ID INTEGER,
            Status TEXT,
            Gruppe TEXT,
            Mitarbeiter TEXT,
            Aktualisierungsdatum TEXT,
            Aktualisiert TEXT,
            SLA TEXT,
            Anfragender TEXT,
            Angefragt TEXT,
            Routing TEXT
        )"
    )
}

fn insert_sql(table: &str) -> String {
    format!(
        "INSERT INTO {table} ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        COLUMNS.join(", ")
    )
}

impl RecordStore for SqliteStore {
    fn insert_records(&mut self, records: &[ExportRecord]) -> Result<usize> {
        // 整批寫入、最後一次提交；中途失敗時整筆交易回滾
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&insert_sql(&self.table))?;
            for record in records {
                stmt.execute(params![
                    record.id,
                    record.status,
                    record.gruppe,
                    record.mitarbeiter,
                    record.aktualisierungsdatum,
                    record.aktualisiert,
                    record.sla,
                    record.anfragender,
                    record.angefragt,
                    record.routing,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> StoreConfig {
        StoreConfig {
            db_path: dir.path().join("nested").join("test.db"),
            table_name: "zendesk_export".to_string(),
        }
    }

    fn sample_record(id: i64) -> ExportRecord {
        ExportRecord {
            id,
            status: "open".to_string(),
            gruppe: "support".to_string(),
            mitarbeiter: "alice".to_string(),
            aktualisierungsdatum: "2024-01-01".to_string(),
            aktualisiert: "2024-01-02".to_string(),
            sla: "met".to_string(),
            anfragender: "bob".to_string(),
            angefragt: "2024-01-01".to_string(),
            routing: "email".to_string(),
        }
    }

    #[test]
    fn test_init_creates_directory_and_table() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        SqliteStore::init(&config).unwrap();

        assert!(config.db_path.exists());
        let store = SqliteStore::open(&config).unwrap();
        assert_eq!(store.count_records().unwrap(), 0);
    }

    #[test]
    fn test_init_twice_preserves_existing_rows() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        SqliteStore::init(&config).unwrap();
        let mut store = SqliteStore::open(&config).unwrap();
        store
            .insert_records(&[sample_record(1), sample_record(2)])
            .unwrap();
        drop(store);

        // 模擬第二次啟動
        SqliteStore::init(&config).unwrap();

        let store = SqliteStore::open(&config).unwrap();
        assert_eq!(store.count_records().unwrap(), 2);
    }

    #[test]
    fn test_insert_records_is_visible_from_fresh_connection() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        SqliteStore::init(&config).unwrap();
        let mut store = SqliteStore::open(&config).unwrap();
        let inserted = store.insert_records(&[sample_record(7)]).unwrap();
        assert_eq!(inserted, 1);
        drop(store);

        let conn = Connection::open(&config.db_path).unwrap();
        let (id, status): (i64, String) = conn
            .query_row("SELECT ID, Status FROM zendesk_export", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(status, "open");
    }

    #[test]
    fn test_insert_empty_batch_is_ok() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        SqliteStore::init(&config).unwrap();
        let mut store = SqliteStore::open(&config).unwrap();
        assert_eq!(store.insert_records(&[]).unwrap(), 0);
        assert_eq!(store.count_records().unwrap(), 0);
    }
}

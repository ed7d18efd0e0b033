// User Intake - Storage Gateway
// Wraps the document collection holding user records. Each record is stored as
// a document row: fixed scalar columns plus a JSON column for the expense map,
// and an internal doc_id that reads never surface.

use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::record::UserRecord;

/// Explicitly constructed gateway to the record collection.
///
/// Open one at startup and pass it to whatever needs it; the connection closes
/// when the gateway drops. Safe to share behind `Arc<Mutex<_>>` across
/// concurrent callers.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the store at the given path and ensure the collection
    /// exists. WAL mode is enabled for crash recovery.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        setup_collection(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        setup_collection(&conn)?;
        Ok(Self { conn })
    }

    /// Persist a single record. The store assigns an opaque internal id that
    /// is never returned to callers. Fails with a storage error on write
    /// failure; nothing is partially committed.
    pub fn insert_one(&self, record: &UserRecord) -> Result<()> {
        let expenses_json = serde_json::to_string(&record.expenses)?;
        self.conn.execute(
            "INSERT INTO user_records (doc_id, age, gender, income, expenses)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                uuid::Uuid::new_v4().to_string(),
                record.age,
                record.gender,
                record.income,
                expenses_json,
            ],
        )?;
        Ok(())
    }

    /// Persist a batch of records as one logical operation (a single store
    /// transaction, so the batch lands all-or-nothing).
    pub fn insert_many(&mut self, records: &[UserRecord]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO user_records (doc_id, age, gender, income, expenses)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for record in records {
                let expenses_json = serde_json::to_string(&record.expenses)?;
                stmt.execute(params![
                    uuid::Uuid::new_v4().to_string(),
                    record.age,
                    record.gender,
                    record.income,
                    expenses_json,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Return every stored record with the internal id stripped.
    ///
    /// Order is storage-native and not guaranteed to match insertion order;
    /// callers must not rely on it.
    pub fn find_all(&self) -> Result<Vec<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT age, gender, income, expenses FROM user_records")?;

        let rows = stmt.query_map([], |row| {
            let expenses_json: String = row.get(3)?;
            let expenses: BTreeMap<String, f64> = serde_json::from_str(&expenses_json)
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;

            Ok(UserRecord {
                age: row.get(0)?,
                gender: row.get(1)?,
                income: row.get(2)?,
                expenses,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<i64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM user_records", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn setup_collection(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS user_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            doc_id TEXT UNIQUE NOT NULL,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL,
            income REAL NOT NULL,
            expenses TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

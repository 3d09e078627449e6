use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::fmt;
use std::sync::Mutex;

const SCHEMA: &str = include_str!("schema.sql");

// One completed level attempt. Append-only: never mutated, never deleted;
// repeat attempts for the same (player_id, level) pair are separate records.
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub id: String,
    pub player_id: String,
    pub display_name: String,
    pub level: i64,
    pub strokes: i64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum StoreError {
    Unavailable(rusqlite::Error),
    InvalidRecord(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(e) => write!(f, "score store unavailable: {}", e),
            StoreError::InvalidRecord(msg) => write!(f, "invalid score record: {}", msg),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Unavailable(e)
    }
}

// Retrieval order is unspecified; the ranking engine sorts for itself.
pub trait ScoreStore {
    fn append(&self, record: &ScoreRecord) -> Result<(), StoreError>;
    fn all_records(&self) -> Result<Vec<ScoreRecord>, StoreError>;
    fn records_for_level(&self, level: i64) -> Result<Vec<ScoreRecord>, StoreError>;
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T, rusqlite::Error>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error>,
    {
        let conn = self.conn.lock().unwrap();
        f(&conn)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ScoreRecord> {
    Ok(ScoreRecord {
        id: row.get(0)?,
        player_id: row.get(1)?,
        display_name: row.get(2)?,
        level: row.get(3)?,
        strokes: row.get(4)?,
        submitted_at: row.get(5)?,
    })
}

impl ScoreStore for SqliteStore {
    fn append(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        if record.strokes <= 0 {
            return Err(StoreError::InvalidRecord("strokes must be positive".into()));
        }
        if record.level <= 0 {
            return Err(StoreError::InvalidRecord("level must be positive".into()));
        }

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO scores (id, player_id, display_name, level, strokes, submitted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id,
                    record.player_id,
                    record.display_name,
                    record.level,
                    record.strokes,
                    record.submitted_at,
                ],
            )
        })?;
        Ok(())
    }

    fn all_records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, player_id, display_name, level, strokes, submitted_at FROM scores",
            )?;
            let rows = stmt.query_map([], row_to_record)?;

            // A row that fails mid-iteration fails the whole call; the engine
            // is never handed a silently truncated set.
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })?)
    }

    fn records_for_level(&self, level: i64) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, player_id, display_name, level, strokes, submitted_at
                 FROM scores WHERE level = ?1",
            )?;
            let rows = stmt.query_map(params![level], row_to_record)?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })?)
    }
}

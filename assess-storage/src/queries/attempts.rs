//! Queries for the attempts table, including the paginated recency listing.

use assess_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use super::util::sqlite_err;
use crate::pagination::{paginate, Cursor, Direction, KeysetRow, Page};

/// An attempt row.
#[derive(Debug, Clone)]
pub struct AttemptRow {
    pub id: i64,
    pub form_id: i64,
    pub student: String,
    pub created_at: i64,
}

impl KeysetRow for AttemptRow {
    fn sort_value(&self) -> i64 {
        self.created_at
    }

    fn row_id(&self) -> i64 {
        self.id
    }
}

/// Insert an attempt. Returns the row id.
pub fn insert_attempt(
    conn: &Connection,
    form_id: i64,
    student: &str,
    created_at: i64,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO attempts (form_id, student, created_at) VALUES (?1, ?2, ?3)",
        params![form_id, student, created_at],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Fetch one attempt by id.
pub fn get_attempt(conn: &Connection, id: i64) -> Result<Option<AttemptRow>, StorageError> {
    conn.query_row(
        "SELECT id, form_id, student, created_at FROM attempts WHERE id = ?1",
        params![id],
        map_attempt_row,
    )
    .optional()
    .map_err(sqlite_err)
}

/// One page of attempts, newest first (created_at DESC, id DESC tiebreak).
pub fn page_recent(
    conn: &Connection,
    cursor: Option<&str>,
    direction: Direction,
    page_size: usize,
) -> Result<Page<AttemptRow>, StorageError> {
    paginate(cursor, direction, page_size, |boundary, dir, limit| {
        fetch_slice(conn, boundary, dir, limit)
    })
}

/// Fetch a slice of the attempts listing around a boundary. Forward scans
/// run in display order; backward scans run reversed and are re-reversed by
/// the paginator.
fn fetch_slice(
    conn: &Connection,
    boundary: Option<&Cursor>,
    direction: Direction,
    limit: usize,
) -> Result<Vec<AttemptRow>, StorageError> {
    match boundary {
        None => {
            let mut stmt = conn
                .prepare_cached(
                    "SELECT id, form_id, student, created_at FROM attempts
                     ORDER BY created_at DESC, id DESC LIMIT ?1",
                )
                .map_err(sqlite_err)?;
            let rows = stmt
                .query_map(params![limit as i64], map_attempt_row)
                .map_err(sqlite_err)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
        }
        Some(c) => {
            let sql = match direction {
                // Strictly after the boundary in display (descending) order.
                Direction::Forward => {
                    "SELECT id, form_id, student, created_at FROM attempts
                     WHERE created_at < ?1 OR (created_at = ?1 AND id < ?2)
                     ORDER BY created_at DESC, id DESC LIMIT ?3"
                }
                // Strictly before the boundary, scanned in reverse.
                Direction::Backward => {
                    "SELECT id, form_id, student, created_at FROM attempts
                     WHERE created_at > ?1 OR (created_at = ?1 AND id > ?2)
                     ORDER BY created_at ASC, id ASC LIMIT ?3"
                }
            };
            let mut stmt = conn.prepare_cached(sql).map_err(sqlite_err)?;
            let rows = stmt
                .query_map(
                    params![c.sort_value, c.row_id, limit as i64],
                    map_attempt_row,
                )
                .map_err(sqlite_err)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
        }
    }
}

fn map_attempt_row(row: &rusqlite::Row) -> rusqlite::Result<AttemptRow> {
    Ok(AttemptRow {
        id: row.get(0)?,
        form_id: row.get(1)?,
        student: row.get(2)?,
        created_at: row.get(3)?,
    })
}

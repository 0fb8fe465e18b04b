//! Queries for the response_rubric_scores table — judge level assignments.

use assess_core::errors::StorageError;
use rusqlite::{params, Connection};

use super::util::sqlite_err;

/// Record a judge's level for one criterion, replacing any prior
/// assignment for the same (response, criterion).
pub fn upsert_level(
    conn: &Connection,
    response_id: i64,
    criterion_id: i64,
    level: u32,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO response_rubric_scores (response_id, criterion_id, level)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(response_id, criterion_id) DO UPDATE SET level = excluded.level",
        params![response_id, criterion_id, level],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// All recorded (criterion_id, level) pairs for a response. Criteria with
/// no recorded level are simply absent; the scoring service treats them as
/// level 0.
pub fn levels_for_response(
    conn: &Connection,
    response_id: i64,
) -> Result<Vec<(i64, u32)>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT criterion_id, level FROM response_rubric_scores WHERE response_id = ?1",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![response_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, u32>(1)?))
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

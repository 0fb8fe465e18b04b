//! Queries for the rubrics and rubric_criteria tables.

use assess_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use super::util::sqlite_err;

/// A rubric criterion row, ordered by position within its rubric.
#[derive(Debug, Clone)]
pub struct CriterionRow {
    pub id: i64,
    pub position: i64,
    pub description: String,
    pub max_level: i64,
    pub weight: f64,
}

/// Attach a rubric to a constructed item. Returns the row id. Fails on a
/// second rubric for the same item (unique item_id).
pub fn insert_rubric(conn: &Connection, item_id: i64, title: &str) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO rubrics (item_id, title) VALUES (?1, ?2)",
        params![item_id, title],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// The rubric id for an item, if one exists.
pub fn rubric_for_item(conn: &Connection, item_id: i64) -> Result<Option<i64>, StorageError> {
    conn.query_row(
        "SELECT id FROM rubrics WHERE item_id = ?1",
        params![item_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(sqlite_err)
}

/// Add a criterion to a rubric. Returns the row id.
pub fn insert_criterion(
    conn: &Connection,
    rubric_id: i64,
    position: i64,
    description: &str,
    weight: f64,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO rubric_criteria (rubric_id, position, description, weight)
         VALUES (?1, ?2, ?3, ?4)",
        params![rubric_id, position, description, weight],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// All criteria for a rubric, ordered by position.
pub fn criteria_for_rubric(
    conn: &Connection,
    rubric_id: i64,
) -> Result<Vec<CriterionRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, position, description, max_level, weight
             FROM rubric_criteria WHERE rubric_id = ?1 ORDER BY position ASC",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![rubric_id], |row| {
            Ok(CriterionRow {
                id: row.get(0)?,
                position: row.get(1)?,
                description: row.get(2)?,
                max_level: row.get(3)?,
                weight: row.get(4)?,
            })
        })
        .map_err(sqlite_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

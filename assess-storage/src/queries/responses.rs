//! Queries for the responses table.
//!
//! Score columns (raw_score, max_score, scoring_metadata) are written only
//! through [`update_score`]; answer submission never touches them.

use assess_core::errors::StorageError;
use assess_core::types::ScoringMetadata;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use super::util::{decimal_to_text, opt_text_to_decimal, sqlite_err};

/// A response row. At most one per (attempt, item).
#[derive(Debug, Clone)]
pub struct ResponseRow {
    pub id: i64,
    pub attempt_id: i64,
    pub item_id: i64,
    pub choice_id: Option<i64>,
    pub answer_text: Option<String>,
    pub raw_score: Option<Decimal>,
    pub max_score: Option<Decimal>,
    pub scoring_metadata: Option<ScoringMetadata>,
}

/// Record a submitted answer. Returns the row id. A second response for the
/// same (attempt, item) violates the unique constraint and fails.
pub fn insert_response(
    conn: &Connection,
    attempt_id: i64,
    item_id: i64,
    choice_id: Option<i64>,
    answer_text: Option<&str>,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO responses (attempt_id, item_id, choice_id, answer_text)
         VALUES (?1, ?2, ?3, ?4)",
        params![attempt_id, item_id, choice_id, answer_text],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Fetch one response by id.
pub fn get_response(conn: &Connection, id: i64) -> Result<Option<ResponseRow>, StorageError> {
    let raw = conn
        .query_row(
            "SELECT id, attempt_id, item_id, choice_id, answer_text,
                    raw_score, max_score, scoring_metadata
             FROM responses WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, Option<String>>(6)?,
                    row.get::<_, Option<String>>(7)?,
                ))
            },
        )
        .optional()
        .map_err(sqlite_err)?;

    let Some((id, attempt_id, item_id, choice_id, answer_text, raw_score, max_score, metadata)) =
        raw
    else {
        return Ok(None);
    };

    let scoring_metadata = metadata
        .map(|json| {
            ScoringMetadata::from_json(&json).map_err(|e| StorageError::InvalidMetadata {
                message: e.to_string(),
            })
        })
        .transpose()?;

    Ok(Some(ResponseRow {
        id,
        attempt_id,
        item_id,
        choice_id,
        answer_text,
        raw_score: opt_text_to_decimal("responses.raw_score", raw_score)?,
        max_score: opt_text_to_decimal("responses.max_score", max_score)?,
        scoring_metadata,
    }))
}

/// Persist a computed (or manually overridden) score with its provenance.
pub fn update_score(
    conn: &Connection,
    id: i64,
    raw_score: Decimal,
    max_score: Decimal,
    metadata: &ScoringMetadata,
) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE responses SET raw_score = ?1, max_score = ?2, scoring_metadata = ?3
         WHERE id = ?4",
        params![
            decimal_to_text(raw_score),
            decimal_to_text(max_score),
            metadata.to_json(),
            id
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

//! Queries for the items, choices, and choice_scores tables.

use assess_core::errors::StorageError;
use assess_core::types::ItemKind;
use rusqlite::{params, Connection, OptionalExtension};

use super::util::sqlite_err;

/// A choice row.
#[derive(Debug, Clone)]
pub struct ChoiceRow {
    pub id: i64,
    pub item_id: i64,
    pub choice_no: i64,
    pub label: String,
}

/// A choice's scoring weight.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceScoreRow {
    pub score_percent: u32,
    pub is_key: bool,
}

/// Insert an item. Returns the row id.
pub fn insert_item(
    conn: &Connection,
    kind: ItemKind,
    prompt: &str,
    created_at: i64,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO items (kind, prompt, created_at) VALUES (?1, ?2, ?3)",
        params![kind.as_str(), prompt, created_at],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Look up an item's kind. `None` when the item does not exist.
pub fn item_kind(conn: &Connection, item_id: i64) -> Result<Option<ItemKind>, StorageError> {
    let kind: Option<String> = conn
        .query_row(
            "SELECT kind FROM items WHERE id = ?1",
            params![item_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(sqlite_err)?;
    match kind {
        None => Ok(None),
        Some(s) => ItemKind::parse(&s)
            .map(Some)
            .ok_or(StorageError::SqliteError {
                message: format!("item {item_id} has unknown kind {s:?}"),
            }),
    }
}

/// Insert a choice for an mcq item. Returns the row id.
pub fn insert_choice(
    conn: &Connection,
    item_id: i64,
    choice_no: i64,
    label: &str,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO choices (item_id, choice_no, label) VALUES (?1, ?2, ?3)",
        params![item_id, choice_no, label],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Assign or replace a choice's scoring weight.
pub fn set_choice_score(
    conn: &Connection,
    choice_id: i64,
    score_percent: u32,
    is_key: bool,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO choice_scores (choice_id, score_percent, is_key) VALUES (?1, ?2, ?3)
         ON CONFLICT(choice_id) DO UPDATE SET
           score_percent = excluded.score_percent,
           is_key = excluded.is_key",
        params![choice_id, score_percent, is_key],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Fetch one choice by id.
pub fn get_choice(conn: &Connection, choice_id: i64) -> Result<Option<ChoiceRow>, StorageError> {
    conn.query_row(
        "SELECT id, item_id, choice_no, label FROM choices WHERE id = ?1",
        params![choice_id],
        |row| {
            Ok(ChoiceRow {
                id: row.get(0)?,
                item_id: row.get(1)?,
                choice_no: row.get(2)?,
                label: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(sqlite_err)
}

/// Fetch a choice's scoring weight, if one has been assigned.
pub fn get_choice_score(
    conn: &Connection,
    choice_id: i64,
) -> Result<Option<ChoiceScoreRow>, StorageError> {
    conn.query_row(
        "SELECT score_percent, is_key FROM choice_scores WHERE choice_id = ?1",
        params![choice_id],
        |row| {
            Ok(ChoiceScoreRow {
                score_percent: row.get(0)?,
                is_key: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(sqlite_err)
}

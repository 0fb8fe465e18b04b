//! Queries for the forms and form_items tables.

use assess_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use super::util::{decimal_to_text, sqlite_err, text_to_decimal};

/// Insert a form. Returns the row id.
pub fn insert_form(conn: &Connection, name: &str, created_at: i64) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO forms (name, created_at) VALUES (?1, ?2)",
        params![name, created_at],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Bind an item into a form at a position with a point value.
pub fn insert_form_item(
    conn: &Connection,
    form_id: i64,
    item_id: i64,
    position: i64,
    points: Decimal,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO form_items (form_id, item_id, position, points) VALUES (?1, ?2, ?3, ?4)",
        params![form_id, item_id, position, decimal_to_text(points)],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// The point value allocated to an item within a form. `None` when the item
/// is not bound into the form; the scoring service treats that as zero
/// points rather than an error.
pub fn points_for(
    conn: &Connection,
    form_id: i64,
    item_id: i64,
) -> Result<Option<Decimal>, StorageError> {
    let text: Option<String> = conn
        .query_row(
            "SELECT points FROM form_items WHERE form_id = ?1 AND item_id = ?2",
            params![form_id, item_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(sqlite_err)?;
    text.map(|t| text_to_decimal("form_items.points", t)).transpose()
}

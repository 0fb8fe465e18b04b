//! Keyset cursor pagination — no OFFSET/LIMIT.
//!
//! A cursor pins a boundary row by (sort value, row id), so concurrent
//! inserts and deletes cannot shift the position of an already-issued
//! cursor the way row offsets do. Pages over-fetch by one row to detect
//! whether more rows exist, then discard the sentinel.

use std::collections::BTreeMap;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use assess_core::errors::StorageError;

/// Cursor format version. Decoding rejects tokens from any other version.
pub const CURSOR_VERSION: u8 = 1;

/// Navigation direction relative to a cursor boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The URL parameter value for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }

    /// Parse a URL parameter value. Anything other than `backward` is
    /// treated as the forward default.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("backward") => Direction::Backward,
            _ => Direction::Forward,
        }
    }
}

/// A pagination boundary: the (sort value, id) of a row at a page edge,
/// plus the direction the token was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    #[serde(rename = "v")]
    pub version: u8,
    #[serde(rename = "s")]
    pub sort_value: i64,
    #[serde(rename = "id")]
    pub row_id: i64,
    #[serde(rename = "d")]
    pub direction: Direction,
}

impl Cursor {
    pub fn new(sort_value: i64, row_id: i64, direction: Direction) -> Self {
        Self {
            version: CURSOR_VERSION,
            sort_value,
            row_id,
            direction,
        }
    }

    /// Encode as URL-safe base64 over the versioned JSON payload.
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode a token. Returns `None` for malformed payloads or unknown
    /// versions; callers fall back to the first page.
    pub fn decode(token: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
        let cursor: Cursor = serde_json::from_slice(&bytes).ok()?;
        (cursor.version == CURSOR_VERSION).then_some(cursor)
    }
}

/// A bounded page plus navigation state.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
}

/// A row type that can anchor a keyset cursor.
pub trait KeysetRow {
    /// The primary sort key value (descending display order).
    fn sort_value(&self) -> i64;
    /// The unique tiebreaker.
    fn row_id(&self) -> i64;
}

/// Fetch one page around an optional cursor token.
///
/// `fetch(boundary, direction, limit)` returns up to `limit` rows in scan
/// order: display order for forward scans, reversed for backward scans
/// (this function restores display order). An absent or undecodable token
/// degrades to the first page rather than failing; a bad cursor only
/// affects navigation, never data integrity.
pub fn paginate<T, F>(
    token: Option<&str>,
    direction: Direction,
    page_size: usize,
    fetch: F,
) -> Result<Page<T>, StorageError>
where
    T: KeysetRow,
    F: FnOnce(Option<&Cursor>, Direction, usize) -> Result<Vec<T>, StorageError>,
{
    let boundary = token.and_then(Cursor::decode);
    if token.is_some() && boundary.is_none() {
        tracing::debug!("undecodable pagination cursor, falling back to first page");
    }
    let direction = if boundary.is_none() {
        Direction::Forward
    } else {
        direction
    };

    let mut rows = fetch(boundary.as_ref(), direction, page_size + 1)?;
    let overflow = rows.len() > page_size;
    if overflow {
        rows.truncate(page_size);
    }
    if direction == Direction::Backward {
        rows.reverse();
    }

    // Beyond the fetched slice, the boundary row itself (and everything
    // past it) still lies in the opposite direction.
    let (has_next, has_prev) = match (boundary.is_some(), direction) {
        (false, _) => (overflow, false),
        (true, Direction::Forward) => (overflow, true),
        (true, Direction::Backward) => (true, overflow),
    };

    let next_cursor = if has_next {
        rows.last()
            .map(|r| Cursor::new(r.sort_value(), r.row_id(), Direction::Forward).encode())
    } else {
        None
    };
    let prev_cursor = if has_prev {
        rows.first()
            .map(|r| Cursor::new(r.sort_value(), r.row_id(), Direction::Backward).encode())
    } else {
        None
    };

    Ok(Page {
        items: rows,
        has_next,
        has_prev,
        next_cursor,
        prev_cursor,
    })
}

/// Merge a cursor token into base link parameters. The direction key is
/// omitted for `forward`, the implicit default.
pub fn pagination_params(
    token: &str,
    direction: Direction,
    base: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut params = base.clone();
    params.insert("cursor".to_string(), token.to_string());
    match direction {
        Direction::Forward => {
            params.remove("direction");
        }
        Direction::Backward => {
            params.insert("direction".to_string(), direction.as_str().to_string());
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_roundtrip_exact() {
        let cursor = Cursor::new(1_700_000_123, 42, Direction::Forward);
        let decoded = Cursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
        assert_eq!(decoded.sort_value, 1_700_000_123);
        assert_eq!(decoded.row_id, 42);
    }

    #[test]
    fn cursor_negative_sort_value() {
        let cursor = Cursor::new(-5, i64::MAX, Direction::Backward);
        assert_eq!(Cursor::decode(&cursor.encode()), Some(cursor));
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert_eq!(Cursor::decode(""), None);
        assert_eq!(Cursor::decode("not base64 !!"), None);
        // Valid base64, not our payload
        assert_eq!(Cursor::decode(&URL_SAFE_NO_PAD.encode("hello")), None);
    }

    #[test]
    fn unknown_version_rejected() {
        let mut cursor = Cursor::new(10, 1, Direction::Forward);
        cursor.version = 2;
        let json = serde_json::to_vec(&cursor).unwrap();
        let token = URL_SAFE_NO_PAD.encode(json);
        assert_eq!(Cursor::decode(&token), None);
    }

    #[test]
    fn direction_parse_defaults_forward() {
        assert_eq!(Direction::parse(None), Direction::Forward);
        assert_eq!(Direction::parse(Some("forward")), Direction::Forward);
        assert_eq!(Direction::parse(Some("sideways")), Direction::Forward);
        assert_eq!(Direction::parse(Some("backward")), Direction::Backward);
    }

    #[test]
    fn params_omit_forward_direction() {
        let mut base = BTreeMap::new();
        base.insert("form_id".to_string(), "7".to_string());
        base.insert("direction".to_string(), "backward".to_string());

        let params = pagination_params("abc", Direction::Forward, &base);
        assert_eq!(params.get("cursor").map(String::as_str), Some("abc"));
        assert_eq!(params.get("form_id").map(String::as_str), Some("7"));
        // Forward is implicit, stale direction removed.
        assert!(params.get("direction").is_none());

        let params = pagination_params("abc", Direction::Backward, &base);
        assert_eq!(params.get("direction").map(String::as_str), Some("backward"));
    }
}

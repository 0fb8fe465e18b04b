//! Shared query helpers.

use std::str::FromStr;

use assess_core::errors::StorageError;
use rust_decimal::Decimal;

/// Map a rusqlite error into a storage error.
pub fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Parse a decimal TEXT column value.
pub fn text_to_decimal(column: &'static str, value: String) -> Result<Decimal, StorageError> {
    Decimal::from_str(&value).map_err(|_| StorageError::InvalidDecimal { column, value })
}

/// Parse a nullable decimal TEXT column value.
pub fn opt_text_to_decimal(
    column: &'static str,
    value: Option<String>,
) -> Result<Option<Decimal>, StorageError> {
    value.map(|v| text_to_decimal(column, v)).transpose()
}

/// Serialize a decimal for TEXT storage. `Decimal`'s display form parses
/// back to the identical value, which is what keeps stored scores exact.
pub fn decimal_to_text(value: Decimal) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_decimal_text_roundtrip() {
        for s in ["0", "8", "5.25", "0.001", "-3.5", "6.000"] {
            let d = Decimal::from_str(s).unwrap();
            let back = text_to_decimal("raw_score", decimal_to_text(d)).unwrap();
            assert_eq!(back, d);
        }
    }

    #[test]
    fn junk_text_is_invalid_decimal() {
        let err = text_to_decimal("raw_score", "ten".to_string()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidDecimal { column: "raw_score", .. }));
    }
}

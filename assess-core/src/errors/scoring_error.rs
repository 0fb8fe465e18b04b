//! Scoring errors.

use std::fmt;

use rust_decimal::Decimal;

use super::storage_error::StorageError;

/// The specific input a scoring call found absent.
///
/// Scoring is deterministic over current data, so none of these are retried:
/// the caller fixes the underlying data (assigns a choice score, attaches a
/// rubric) and re-invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    /// The response has no selected choice.
    ChoiceNotSelected,
    /// The selected choice has no choice score attached.
    ChoiceScoreAbsent,
    /// The constructed item has no rubric.
    RubricAbsent,
    /// The rubric exists but has zero criteria.
    RubricCriteriaEmpty,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissingInput::ChoiceNotSelected => "no choice selected",
            MissingInput::ChoiceScoreAbsent => "selected choice has no choice score",
            MissingInput::RubricAbsent => "item has no rubric",
            MissingInput::RubricCriteriaEmpty => "rubric has no criteria",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while scoring a response.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("response {response_id} not found")]
    ResponseNotFound { response_id: i64 },

    #[error("missing scoring data for response {response_id}: {reason}")]
    MissingScoringData { response_id: i64, reason: MissingInput },

    #[error("rubric level {level} out of range 0..={max}")]
    LevelOutOfRange { level: i64, max: u32 },

    #[error("override raw score {raw} exceeds max score {max}")]
    OverrideExceedsMax { raw: Decimal, max: Decimal },

    #[error("override score {value} is negative")]
    NegativeOverride { value: Decimal },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

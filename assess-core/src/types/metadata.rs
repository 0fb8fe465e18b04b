//! Scoring provenance metadata.
//!
//! Each scored response records how its score was derived. The record is a
//! tagged union so each mode's fields are statically known, serialized to
//! JSON in the `responses.scoring_metadata` column.

use serde::{Deserialize, Serialize};

/// How a response's score was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum ScoringMetadata {
    /// Automatic multiple-choice scoring from the selected choice's weight.
    #[serde(rename = "mcq_auto")]
    McqAuto {
        score_percent: u32,
        choice_no: i64,
        is_key: bool,
        /// Set when the item had no form_items link, so points defaulted to 0.
        #[serde(default, skip_serializing_if = "is_false")]
        points_missing: bool,
    },

    /// Rubric-based constructed-response scoring: sum of judge levels over
    /// the maximum attainable level sum, weighted by the item's form points.
    #[serde(rename = "rubric_weighted")]
    RubricWeighted {
        criteria_count: u32,
        level_sum: u32,
        max_level_sum: u32,
        #[serde(default, skip_serializing_if = "is_false")]
        points_missing: bool,
    },

    /// Manual teacher override. Replaces any computed score until the
    /// response is rescored.
    #[serde(rename = "manual")]
    Manual,
}

impl ScoringMetadata {
    /// Serialize to the JSON stored in `responses.scoring_metadata`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from the stored JSON column value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The mode tag as stored in the JSON.
    pub fn mode(&self) -> &'static str {
        match self {
            ScoringMetadata::McqAuto { .. } => "mcq_auto",
            ScoringMetadata::RubricWeighted { .. } => "rubric_weighted",
            ScoringMetadata::Manual => "manual",
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

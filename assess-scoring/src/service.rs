//! The scoring service.

use std::collections::HashMap;

use rust_decimal::Decimal;

use assess_core::errors::{MissingInput, ScoringError, StorageError};
use assess_core::types::{ItemKind, ScoringMetadata, MAX_RUBRIC_LEVEL};
use assess_storage::queries::items::{ChoiceRow, ChoiceScoreRow};
use assess_storage::queries::rubrics::CriterionRow;
use assess_storage::queries::{attempts, forms, items, responses, rubric_scores, rubrics};
use assess_storage::DatabaseManager;

/// A computed score ready to persist.
struct Outcome {
    raw: Decimal,
    max: Decimal,
    metadata: ScoringMetadata,
}

/// Compute and persist the score for one response.
///
/// Missing inputs (no selected choice, a choice with no score weight, no
/// rubric, a rubric with no criteria) fail with
/// [`ScoringError::MissingScoringData`]; the caller corrects the data and
/// re-invokes. A missing form_items link is not an error: points default to
/// zero and the metadata carries `points_missing`.
pub fn score_response(db: &DatabaseManager, response_id: i64) -> Result<(), ScoringError> {
    let response = db
        .with_reader(|conn| responses::get_response(conn, response_id))?
        .ok_or(ScoringError::ResponseNotFound { response_id })?;

    let attempt = db
        .with_reader(|conn| attempts::get_attempt(conn, response.attempt_id))?
        .ok_or_else(|| StorageError::SqliteError {
            message: format!(
                "attempt {} missing for response {response_id}",
                response.attempt_id
            ),
        })?;

    let kind = db
        .with_reader(|conn| items::item_kind(conn, response.item_id))?
        .ok_or_else(|| StorageError::SqliteError {
            message: format!("item {} missing for response {response_id}", response.item_id),
        })?;

    let points =
        db.with_reader(|conn| forms::points_for(conn, attempt.form_id, response.item_id))?;

    let outcome = match kind {
        ItemKind::Mcq => {
            let choice_id = response.choice_id.ok_or(ScoringError::MissingScoringData {
                response_id,
                reason: MissingInput::ChoiceNotSelected,
            })?;
            let choice = db
                .with_reader(|conn| items::get_choice(conn, choice_id))?
                .ok_or_else(|| StorageError::SqliteError {
                    message: format!("choice {choice_id} missing for response {response_id}"),
                })?;
            let weight = db
                .with_reader(|conn| items::get_choice_score(conn, choice_id))?
                .ok_or(ScoringError::MissingScoringData {
                    response_id,
                    reason: MissingInput::ChoiceScoreAbsent,
                })?;
            mcq_outcome(&choice, weight, points)
        }
        ItemKind::Constructed => {
            let rubric_id = db
                .with_reader(|conn| rubrics::rubric_for_item(conn, response.item_id))?
                .ok_or(ScoringError::MissingScoringData {
                    response_id,
                    reason: MissingInput::RubricAbsent,
                })?;
            let criteria = db.with_reader(|conn| rubrics::criteria_for_rubric(conn, rubric_id))?;
            if criteria.is_empty() {
                return Err(ScoringError::MissingScoringData {
                    response_id,
                    reason: MissingInput::RubricCriteriaEmpty,
                });
            }
            let levels =
                db.with_reader(|conn| rubric_scores::levels_for_response(conn, response_id))?;
            rubric_outcome(&criteria, &levels, points)
        }
    };

    db.with_writer(|conn| {
        responses::update_score(conn, response_id, outcome.raw, outcome.max, &outcome.metadata)
    })?;
    tracing::debug!(
        response_id,
        mode = outcome.metadata.mode(),
        raw = %outcome.raw,
        max = %outcome.max,
        "scored response"
    );
    Ok(())
}

/// Record one judge's level for a criterion. Levels outside the 0..=4 scale
/// are rejected before touching storage.
pub fn record_rubric_level(
    db: &DatabaseManager,
    response_id: i64,
    criterion_id: i64,
    level: i64,
) -> Result<(), ScoringError> {
    if level < 0 || level > i64::from(MAX_RUBRIC_LEVEL) {
        return Err(ScoringError::LevelOutOfRange {
            level,
            max: MAX_RUBRIC_LEVEL,
        });
    }
    db.with_writer(|conn| {
        rubric_scores::upsert_level(conn, response_id, criterion_id, level as u32)
    })?;
    Ok(())
}

/// Manual teacher override. Replaces any computed score with `Manual`
/// provenance; a later [`score_response`] call replaces the override.
pub fn override_score(
    db: &DatabaseManager,
    response_id: i64,
    raw: Decimal,
    max: Decimal,
) -> Result<(), ScoringError> {
    if raw < Decimal::ZERO {
        return Err(ScoringError::NegativeOverride { value: raw });
    }
    if max < Decimal::ZERO {
        return Err(ScoringError::NegativeOverride { value: max });
    }
    if raw > max {
        return Err(ScoringError::OverrideExceedsMax { raw, max });
    }

    db.with_reader(|conn| responses::get_response(conn, response_id))?
        .ok_or(ScoringError::ResponseNotFound { response_id })?;

    db.with_writer(|conn| {
        responses::update_score(conn, response_id, raw, max, &ScoringMetadata::Manual)
    })?;
    tracing::debug!(response_id, raw = %raw, max = %max, "manual score override");
    Ok(())
}

fn mcq_outcome(choice: &ChoiceRow, weight: ChoiceScoreRow, points: Option<Decimal>) -> Outcome {
    let points_missing = points.is_none();
    let max = points.unwrap_or(Decimal::ZERO);
    let raw = max * Decimal::from(weight.score_percent) / Decimal::from(100u32);
    Outcome {
        raw,
        max,
        metadata: ScoringMetadata::McqAuto {
            score_percent: weight.score_percent,
            choice_no: choice.choice_no,
            is_key: weight.is_key,
            points_missing,
        },
    }
}

fn rubric_outcome(
    criteria: &[CriterionRow],
    levels: &[(i64, u32)],
    points: Option<Decimal>,
) -> Outcome {
    let recorded: HashMap<i64, u32> = levels.iter().copied().collect();
    // Unrecorded criteria count as level 0; levels for foreign criteria are
    // ignored because only this rubric's criteria are summed.
    let level_sum: u32 = criteria
        .iter()
        .map(|c| recorded.get(&c.id).copied().unwrap_or(0))
        .sum();
    let criteria_count = criteria.len() as u32;
    let max_level_sum = MAX_RUBRIC_LEVEL * criteria_count;

    let points_missing = points.is_none();
    let max = points.unwrap_or(Decimal::ZERO);
    let raw = max * Decimal::from(level_sum) / Decimal::from(max_level_sum);
    Outcome {
        raw,
        max,
        metadata: ScoringMetadata::RubricWeighted {
            criteria_count,
            level_sum,
            max_level_sum,
            points_missing,
        },
    }
}

//! V001: Initial schema.
//! forms, items, choices, choice_scores, rubrics, rubric_criteria,
//! form_items, attempts, responses, response_rubric_scores.
//!
//! Scores are stored as decimal TEXT so fractional values round-trip exactly.

pub const MIGRATION_SQL: &str = r#"
-- Test forms: a form binds items into one deliverable test.
CREATE TABLE IF NOT EXISTS forms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

-- Items: gradable questions, either multiple-choice or constructed-response.
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    kind TEXT NOT NULL CHECK (kind IN ('mcq', 'constructed')),
    prompt TEXT NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

-- Choices for mcq items.
CREATE TABLE IF NOT EXISTS choices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
    choice_no INTEGER NOT NULL,
    label TEXT NOT NULL,
    UNIQUE(item_id, choice_no)
) STRICT;

-- Percentage weight per choice; is_key marks the canonical correct choice.
CREATE TABLE IF NOT EXISTS choice_scores (
    choice_id INTEGER PRIMARY KEY REFERENCES choices(id) ON DELETE CASCADE,
    score_percent INTEGER NOT NULL CHECK (score_percent BETWEEN 0 AND 100),
    is_key INTEGER NOT NULL DEFAULT 0
) STRICT;

-- At most one rubric per constructed item.
CREATE TABLE IF NOT EXISTS rubrics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_id INTEGER NOT NULL UNIQUE REFERENCES items(id) ON DELETE CASCADE,
    title TEXT NOT NULL
) STRICT;

-- Ordered criteria; levels run 0..=4. weight is part of the authoring data
-- model but does not enter the level sum.
CREATE TABLE IF NOT EXISTS rubric_criteria (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    rubric_id INTEGER NOT NULL REFERENCES rubrics(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    description TEXT NOT NULL,
    max_level INTEGER NOT NULL DEFAULT 4,
    weight REAL NOT NULL DEFAULT 1.0,
    UNIQUE(rubric_id, position)
) STRICT;

-- Binding of an item into a form, with the item's point value in that form.
CREATE TABLE IF NOT EXISTS form_items (
    form_id INTEGER NOT NULL REFERENCES forms(id) ON DELETE CASCADE,
    item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    points TEXT NOT NULL,
    PRIMARY KEY (form_id, item_id)
) STRICT;

-- One student's run through a form.
CREATE TABLE IF NOT EXISTS attempts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    form_id INTEGER NOT NULL REFERENCES forms(id) ON DELETE CASCADE,
    student TEXT NOT NULL,
    created_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_attempts_recent
    ON attempts(created_at DESC, id DESC);

-- One answer per (attempt, item). Score columns are written only by the
-- scoring service and manual override.
CREATE TABLE IF NOT EXISTS responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    attempt_id INTEGER NOT NULL REFERENCES attempts(id) ON DELETE CASCADE,
    item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
    choice_id INTEGER REFERENCES choices(id),
    answer_text TEXT,
    raw_score TEXT,
    max_score TEXT,
    scoring_metadata TEXT,
    UNIQUE(attempt_id, item_id)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_responses_attempt ON responses(attempt_id);

-- One judge level assignment per (response, criterion).
CREATE TABLE IF NOT EXISTS response_rubric_scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    response_id INTEGER NOT NULL REFERENCES responses(id) ON DELETE CASCADE,
    criterion_id INTEGER NOT NULL REFERENCES rubric_criteria(id) ON DELETE CASCADE,
    level INTEGER NOT NULL CHECK (level BETWEEN 0 AND 4),
    UNIQUE(response_id, criterion_id)
) STRICT;
"#;

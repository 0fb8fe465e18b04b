//! Item kind discriminator.

use serde::{Deserialize, Serialize};

/// The two gradable item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Multiple-choice: scored by the selected choice's percentage weight.
    Mcq,
    /// Constructed response: scored by rubric level assignments.
    Constructed,
}

impl ItemKind {
    /// The canonical TEXT column value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Mcq => "mcq",
            ItemKind::Constructed => "constructed",
        }
    }

    /// Parse a TEXT column value. Returns `None` for unknown kinds.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mcq" => Some(ItemKind::Mcq),
            "constructed" => Some(ItemKind::Constructed),
            _ => None,
        }
    }
}

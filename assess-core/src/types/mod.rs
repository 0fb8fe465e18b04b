//! Domain types shared across the storage and scoring crates.

pub mod item;
pub mod metadata;

pub use item::ItemKind;
pub use metadata::ScoringMetadata;

/// Fixed upper bound of the rubric level scale (levels run 0..=4).
pub const MAX_RUBRIC_LEVEL: u32 = 4;

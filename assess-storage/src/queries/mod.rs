//! Query modules for each domain table.

pub mod util;

pub mod attempts;
pub mod forms;
pub mod items;
pub mod responses;
pub mod rubric_scores;
pub mod rubrics;

//! Keyset pagination.

pub mod keyset;

pub use keyset::{paginate, pagination_params, Cursor, Direction, KeysetRow, Page};

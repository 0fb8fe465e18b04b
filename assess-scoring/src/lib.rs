//! Response scoring.
//!
//! Stateless, synchronous calculations over current database state: a call
//! reads the response's item data, computes the score in exact decimal
//! arithmetic, and writes the score plus provenance metadata back onto the
//! response. Rescoring with changed rubric or choice data changes the
//! result; that is the contract, not a bug.

pub mod service;

pub use service::{override_score, record_rubric_level, score_response};

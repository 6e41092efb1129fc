//! Core domain types for the assistant
//!
//! Error kinds, feedback marks and the letter frequency table. Everything here is
//! pure and has no knowledge of word lists or solver state.

mod error;
mod feedback;
mod frequency;

pub use error::SolverError;
pub use feedback::{Feedback, Mark};
pub use frequency::{LETTER_WEIGHTS, frequency_score, letter_weight};

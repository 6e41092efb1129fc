//! Constraint solving
//!
//! Accumulates letter constraints from feedback and ranks the remaining candidates.

pub mod constraints;
mod engine;
pub mod strategy;

pub use constraints::{Constraints, PATTERN_WILDCARD};
pub use engine::Solver;
pub use strategy::{EliminatingStrategy, FirstMatchStrategy, Strategy, StrategyType};

//! Guess suggestion strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::Solver;

/// A strategy for suggesting the next guess from the solver's candidates
pub trait Strategy {
    /// Suggest guesses given the solver's current constraints
    ///
    /// The result is never empty: a single empty string means no candidate matched.
    fn suggest(&self, solver: &Solver<'_>) -> Vec<String>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Highest distinct-letter frequency score among candidates
    Eliminating(EliminatingStrategy),
    /// First candidate in word list order
    FirstMatch(FirstMatchStrategy),
}

impl Strategy for StrategyType {
    fn suggest(&self, solver: &Solver<'_>) -> Vec<String> {
        match self {
            Self::Eliminating(s) => s.suggest(solver),
            Self::FirstMatch(s) => s.suggest(solver),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// `"e"` or `"eliminating"` selects the eliminating strategy; any other name falls back
    /// to the first match.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "e" | "eliminating" => Self::Eliminating(EliminatingStrategy),
            _ => Self::FirstMatch(FirstMatchStrategy),
        }
    }

    /// Short display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eliminating(_) => "eliminating",
            Self::FirstMatch(_) => "first match",
        }
    }
}

/// Suggests the candidate covering the most frequent distinct letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EliminatingStrategy;

impl Strategy for EliminatingStrategy {
    fn suggest(&self, solver: &Solver<'_>) -> Vec<String> {
        vec![solver.eliminating_guess()]
    }
}

/// Suggests the first candidate in word list order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstMatchStrategy;

impl Strategy for FirstMatchStrategy {
    fn suggest(&self, solver: &Solver<'_>) -> Vec<String> {
        solver.guesses()
    }
}

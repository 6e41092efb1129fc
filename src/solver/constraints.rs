//! Accumulated letter constraints
//!
//! Four categories of knowledge about the solution, each of which only ever grows:
//! - excluded letters (absent everywhere)
//! - per-position exclusions (absent at one position, maybe present elsewhere)
//! - required letters (present somewhere)
//! - fixed letters (confirmed at a position)

use crate::core::SolverError;
use rustc_hash::FxHashSet;

/// Symbol leaving a position unchanged in a fixed pattern
pub const PATTERN_WILDCARD: char = '*';

/// Constraint state for words of a single length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    word_length: usize,
    excluded: FxHashSet<char>,
    position_exclusions: Vec<FxHashSet<char>>,
    required: FxHashSet<char>,
    fixed: Vec<Option<char>>,
}

impl Constraints {
    /// Create an empty constraint set: nothing excluded, nothing required, all wildcards
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            excluded: FxHashSet::default(),
            position_exclusions: vec![FxHashSet::default(); word_length],
            required: FxHashSet::default(),
            fixed: vec![None; word_length],
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letters absent from the solution everywhere
    #[must_use]
    pub const fn excluded(&self) -> &FxHashSet<char> {
        &self.excluded
    }

    /// Letters absent at each position
    #[must_use]
    pub fn position_exclusions(&self) -> &[FxHashSet<char>] {
        &self.position_exclusions
    }

    /// Letters present somewhere in the solution
    #[must_use]
    pub const fn required(&self) -> &FxHashSet<char> {
        &self.required
    }

    /// Confirmed letter at each position, `None` for unknown
    #[must_use]
    pub fn fixed(&self) -> &[Option<char>] {
        &self.fixed
    }

    /// Render the fixed letters as a pattern string, `*` for unknown positions
    #[must_use]
    pub fn pattern_string(&self) -> String {
        self.fixed
            .iter()
            .map(|f| f.unwrap_or(PATTERN_WILDCARD))
            .collect()
    }

    /// Add every character of `letters` to the excluded set
    pub fn add_excluded_letters(&mut self, letters: &str) {
        self.excluded.extend(letters.chars());
    }

    pub fn add_excluded_letter(&mut self, letter: char) {
        self.excluded.insert(letter);
    }

    /// Exclude `letter` from `position`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::PositionOutOfRange`] if `position` is past the end of the word.
    pub fn add_position_exclusion(
        &mut self,
        position: usize,
        letter: char,
    ) -> Result<(), SolverError> {
        self.check_position(position)?;
        self.position_exclusions[position].insert(letter);
        Ok(())
    }

    /// Merge one letter set per position into the position exclusions
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] if `per_position` does not have exactly one
    /// entry per position. Nothing is changed in that case.
    pub fn add_position_exclusions<S: AsRef<str>>(
        &mut self,
        per_position: &[S],
    ) -> Result<(), SolverError> {
        self.check_length(per_position.len())?;

        for (set, letters) in self.position_exclusions.iter_mut().zip(per_position) {
            set.extend(letters.as_ref().chars());
        }
        Ok(())
    }

    /// Add every character of `letters` to the required set
    pub fn add_required_letters(&mut self, letters: &str) {
        self.required.extend(letters.chars());
    }

    pub fn add_required_letter(&mut self, letter: char) {
        self.required.insert(letter);
    }

    /// Fix `position` to `letter`, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::PositionOutOfRange`] if `position` is past the end of the word.
    pub fn set_fixed(&mut self, position: usize, letter: char) -> Result<(), SolverError> {
        self.check_position(position)?;
        self.fixed[position] = Some(letter);
        Ok(())
    }

    /// Overlay a pattern such as `"*p*e*"` onto the fixed letters
    ///
    /// Wildcard positions keep whatever was fixed there before.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] if the pattern length differs from the word
    /// length. Nothing is changed in that case.
    pub fn set_fixed_pattern(&mut self, pattern: &str) -> Result<(), SolverError> {
        self.check_length(pattern.chars().count())?;

        for (slot, ch) in self.fixed.iter_mut().zip(pattern.chars()) {
            if ch != PATTERN_WILDCARD {
                *slot = Some(ch);
            }
        }
        Ok(())
    }

    /// Check whether `word` satisfies every constraint
    ///
    /// Checks run cheapest-to-reject first and stop at the first failure:
    /// length, excluded letters, position exclusions, required letters, fixed letters.
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        if word.chars().count() != self.word_length {
            return false;
        }

        if word.chars().any(|c| self.excluded.contains(&c)) {
            return false;
        }

        if word
            .chars()
            .zip(&self.position_exclusions)
            .any(|(c, set)| set.contains(&c))
        {
            return false;
        }

        // Multiplicity is not tracked: one occurrence satisfies a required letter
        if !self.required.iter().all(|&r| word.contains(r)) {
            return false;
        }

        word.chars()
            .zip(&self.fixed)
            .all(|(c, fixed)| fixed.is_none_or(|f| f == c))
    }

    fn check_position(&self, position: usize) -> Result<(), SolverError> {
        if position >= self.word_length {
            return Err(SolverError::PositionOutOfRange {
                position,
                length: self.word_length,
            });
        }
        Ok(())
    }

    fn check_length(&self, actual: usize) -> Result<(), SolverError> {
        if actual != self.word_length {
            return Err(SolverError::LengthMismatch {
                expected: self.word_length,
                actual,
            });
        }
        Ok(())
    }
}

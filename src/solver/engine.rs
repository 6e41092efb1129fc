//! Main solver interface

use super::constraints::Constraints;
use super::strategy::Strategy;
use crate::core::{Feedback, Mark, SolverError, frequency_score};
use crate::wordlists::WordSource;
use rayon::prelude::*;
use tracing::debug;

/// Constraint-driven word solver
///
/// Borrows a read-only [`WordSource`] and narrows it with accumulated constraints.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    source: &'a WordSource,
    constraints: Constraints,
}

impl<'a> Solver<'a> {
    /// Create a solver with no constraints for words of `length` characters
    #[must_use]
    pub fn new(length: usize, source: &'a WordSource) -> Self {
        if source.word_length() != length {
            debug!(
                source_length = source.word_length(),
                length, "word source length differs from solver length"
            );
        }

        Self {
            source,
            constraints: Constraints::new(length),
        }
    }

    /// Create a solver with initial constraints in each category
    ///
    /// Values are applied in order: excluded letters, position exclusions,
    /// required letters, fixed pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] if `position_exclusions` or `pattern` does not
    /// have one entry per position.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::Solver;
    /// use wordle_assist::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(["crane", "slate", "print", "shard"], 5);
    /// let solver =
    ///     Solver::with_constraints(5, &source, "c", &["", "", "", "", ""], "t", "*****").unwrap();
    ///
    /// assert_eq!(solver.candidates(), vec!["slate", "print"]);
    /// ```
    pub fn with_constraints<S: AsRef<str>>(
        length: usize,
        source: &'a WordSource,
        excluded: &str,
        position_exclusions: &[S],
        required: &str,
        pattern: &str,
    ) -> Result<Self, SolverError> {
        let mut solver = Self::new(length, source);
        solver.add_excluded_letters(excluded);
        solver.add_position_exclusions(position_exclusions)?;
        solver.add_required_letters(required);
        solver.set_fixed_pattern(pattern)?;
        Ok(solver)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.constraints.word_length()
    }

    /// The accumulated constraints
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// The word source being filtered
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &'a WordSource {
        self.source
    }

    pub fn add_excluded_letters(&mut self, letters: &str) {
        self.constraints.add_excluded_letters(letters);
    }

    pub fn add_excluded_letter(&mut self, letter: char) {
        self.constraints.add_excluded_letter(letter);
    }

    /// # Errors
    ///
    /// Returns [`SolverError::PositionOutOfRange`] if `position >= word_length()`.
    pub fn add_position_exclusion(
        &mut self,
        position: usize,
        letter: char,
    ) -> Result<(), SolverError> {
        self.constraints.add_position_exclusion(position, letter)
    }

    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] unless there is one entry per position.
    pub fn add_position_exclusions<S: AsRef<str>>(
        &mut self,
        per_position: &[S],
    ) -> Result<(), SolverError> {
        self.constraints.add_position_exclusions(per_position)
    }

    pub fn add_required_letters(&mut self, letters: &str) {
        self.constraints.add_required_letters(letters);
    }

    pub fn add_required_letter(&mut self, letter: char) {
        self.constraints.add_required_letter(letter);
    }

    /// # Errors
    ///
    /// Returns [`SolverError::PositionOutOfRange`] if `position >= word_length()`.
    pub fn set_fixed(&mut self, position: usize, letter: char) -> Result<(), SolverError> {
        self.constraints.set_fixed(position, letter)
    }

    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] if the pattern length differs from
    /// `word_length()`.
    pub fn set_fixed_pattern(&mut self, pattern: &str) -> Result<(), SolverError> {
        self.constraints.set_fixed_pattern(pattern)
    }

    /// Fold color feedback for `guess` into the constraints
    ///
    /// Per position, with `ch` the guessed letter:
    /// - green: `ch` is required and fixed here
    /// - yellow: `ch` is required but excluded here
    /// - black: `ch` is excluded everywhere and here
    ///
    /// Other symbols leave the constraints unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::LengthMismatch`] if either `guess` or `code` differs from
    /// `word_length()`. Nothing is changed in that case.
    pub fn apply_feedback(&mut self, guess: &str, code: &str) -> Result<(), SolverError> {
        let length = self.word_length();
        let guess_len = guess.chars().count();
        if guess_len != length {
            return Err(SolverError::LengthMismatch {
                expected: length,
                actual: guess_len,
            });
        }

        let feedback = Feedback::parse(code);
        if feedback.len() != length {
            return Err(SolverError::LengthMismatch {
                expected: length,
                actual: feedback.len(),
            });
        }

        for (position, (ch, &mark)) in guess.chars().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Green => {
                    self.add_required_letter(ch);
                    self.set_fixed(position, ch)?;
                }
                Mark::Yellow => {
                    self.add_required_letter(ch);
                    self.add_position_exclusion(position, ch)?;
                }
                Mark::Black => {
                    self.add_excluded_letter(ch);
                    self.add_position_exclusion(position, ch)?;
                }
                Mark::Ignored => {}
            }
        }

        debug!(
            guess,
            feedback = %feedback,
            pattern = %self.constraints.pattern_string(),
            "applied feedback"
        );
        Ok(())
    }

    /// Check whether `word` satisfies every current constraint
    #[inline]
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.constraints.is_match(word)
    }

    /// Iterate candidates in source order
    fn matches(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.source.iter().filter(|w| self.is_match(w))
    }

    /// All candidates in source order
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a str> {
        self.matches().collect()
    }

    /// Count how many candidates remain
    ///
    /// Matching only reads the constraints, so the scan fans out across threads.
    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.source
            .words()
            .par_iter()
            .filter(|w| self.is_match(w))
            .count()
    }

    /// Distinct-letter frequency score of `word`
    #[inline]
    #[must_use]
    pub fn frequency_score(word: &str) -> f64 {
        frequency_score(word)
    }

    /// The candidate with the highest frequency score
    ///
    /// Ties keep the first candidate in source order. Returns an empty string if no word
    /// matches.
    #[must_use]
    pub fn eliminating_guess(&self) -> String {
        let mut best: Option<(&str, f64)> = None;

        for word in self.matches() {
            let score = frequency_score(word);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((word, score));
            }
        }

        best.map_or_else(String::new, |(word, _)| word.to_string())
    }

    /// The first candidate in source order, as a single-element list
    ///
    /// When nothing matches the list holds one empty string.
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        vec![self.matches().next().unwrap_or_default().to_string()]
    }

    /// Number of source words lying between the first and second candidates
    ///
    /// A rough ambiguity signal, not a candidate count. Zero when fewer than two words
    /// match.
    #[must_use]
    pub fn confidence(&self) -> usize {
        let mut positions = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, w)| self.is_match(w))
            .map(|(i, _)| i);

        match (positions.next(), positions.next()) {
            (Some(first), Some(second)) => second - first - 1,
            _ => 0,
        }
    }

    /// Suggest guesses using the given strategy
    pub fn suggest<S: Strategy>(&self, strategy: &S) -> Vec<String> {
        strategy.suggest(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_source() -> WordSource {
        WordSource::from_words(["crane", "slate", "print", "shard"], 5)
    }

    #[test]
    fn eliminating_guess_prefers_highest_score() {
        let source = scenario_source();
        let solver = Solver::new(5, &source);

        assert_eq!(solver.eliminating_guess(), "crane");
    }

    #[test]
    fn frequency_score_counts_distinct_letters() {
        let abba = Solver::frequency_score("ABBA");
        assert!((abba - Solver::frequency_score("AB")).abs() < 1e-9);
        assert!(Solver::frequency_score("crane") > Solver::frequency_score("slate"));
    }

    #[test]
    fn eliminating_guess_keeps_first_on_tie() {
        // Anagrams score the same
        let source = WordSource::from_words(["stare", "tears", "rates"], 5);
        let solver = Solver::new(5, &source);

        assert_eq!(solver.eliminating_guess(), "stare");
    }

    #[test]
    fn eliminating_guess_rewards_distinct_letters() {
        let source = WordSource::from_words(["eerie", "crane"], 5);
        let solver = Solver::new(5, &source);

        assert_eq!(solver.eliminating_guess(), "crane");
    }

    #[test]
    fn all_black_feedback_excludes_shared_letters() {
        let source = WordSource::from_words(["crane", "slate", "print", "shard", "dumpy"], 5);
        let mut solver = Solver::new(5, &source);

        solver.apply_feedback("crane", "bbbbb").unwrap();

        assert!(!solver.is_match("crane"));
        assert_eq!(solver.candidates(), vec!["dumpy"]);
    }

    #[test]
    fn green_and_yellow_feedback() {
        let source = WordSource::from_words(["crane", "slate", "plate", "stale", "least"], 5);
        let mut solver = Solver::new(5, &source);

        // Guess SLATE against PLATE: s black, l a t e green
        solver.apply_feedback("slate", "bgggg").unwrap();
        assert_eq!(solver.candidates(), vec!["plate"]);
        assert_eq!(solver.constraints().pattern_string(), "*late");
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let source = WordSource::from_words(["abide", "baker", "croak", "xylem"], 5);
        let mut solver = Solver::new(5, &source);

        solver.apply_feedback("abide", "ybbbb").unwrap();

        assert!(solver.constraints().required().contains(&'a'));
        assert!(solver.constraints().position_exclusions()[0].contains(&'a'));
        // baker has b and xylem has e, both now excluded
        assert_eq!(solver.candidates(), vec!["croak"]);
    }

    #[test]
    fn unknown_feedback_symbols_are_no_ops() {
        let source = scenario_source();
        let mut solver = Solver::new(5, &source);
        let before = solver.constraints().clone();

        solver.apply_feedback("crane", "-?x._").unwrap();

        assert_eq!(solver.constraints(), &before);
    }

    #[test]
    fn feedback_is_case_insensitive() {
        let source = scenario_source();
        let mut upper = Solver::new(5, &source);
        let mut lower = Solver::new(5, &source);

        upper.apply_feedback("crane", "GYBBB").unwrap();
        lower.apply_feedback("crane", "gybbb").unwrap();

        assert_eq!(upper.constraints(), lower.constraints());
    }

    #[test]
    fn feedback_wrong_length_changes_nothing() {
        let source = scenario_source();
        let mut solver = Solver::new(5, &source);
        let before = solver.constraints().clone();

        assert!(matches!(
            solver.apply_feedback("crane", "bbb"),
            Err(SolverError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        ));
        assert!(matches!(
            solver.apply_feedback("cranes", "bbbbb"),
            Err(SolverError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
        assert_eq!(solver.constraints(), &before);
    }

    #[test]
    fn no_candidates_sentinels() {
        let source = scenario_source();
        let mut solver = Solver::new(5, &source);
        solver.add_excluded_letters("aeiou");

        assert_eq!(solver.eliminating_guess(), "");
        assert_eq!(solver.guesses(), vec![String::new()]);
        assert_eq!(solver.confidence(), 0);
        assert!(solver.candidates().is_empty());
        assert_eq!(solver.count_candidates(), 0);
    }

    #[test]
    fn single_candidate_has_zero_confidence() {
        let source = scenario_source();
        let mut solver = Solver::new(5, &source);
        solver.set_fixed(0, 'p').unwrap();

        assert_eq!(solver.candidates(), vec!["print"]);
        assert_eq!(solver.confidence(), 0);
    }

    #[test]
    fn confidence_counts_words_between_first_two_matches() {
        let source = WordSource::from_words(["crane", "slate", "print", "shard", "caper"], 5);
        let mut solver = Solver::new(5, &source);
        assert_eq!(solver.confidence(), 0);

        solver.add_required_letter('c');
        // crane at 0, caper at 4
        assert_eq!(solver.confidence(), 3);
    }

    #[test]
    fn guesses_returns_first_match() {
        let source = scenario_source();
        let mut solver = Solver::new(5, &source);
        solver.add_required_letter('h');

        assert_eq!(solver.guesses(), vec!["shard".to_string()]);
    }

    #[test]
    fn count_matches_candidates() {
        let source = WordSource::from_words(["crane", "slate", "print", "shard", "caper"], 5);
        let mut solver = Solver::new(5, &source);
        assert_eq!(solver.count_candidates(), 5);

        solver.add_required_letter('r');
        assert_eq!(solver.count_candidates(), solver.candidates().len());
        assert_eq!(solver.count_candidates(), 4);
    }

    #[test]
    fn with_constraints_applies_every_category() {
        let source = WordSource::from_words(["crane", "slate", "plate", "stale", "spite"], 5);
        let solver =
            Solver::with_constraints(5, &source, "c", &["s", "", "", "", ""], "a", "**a**")
                .unwrap();

        assert_eq!(solver.candidates(), vec!["plate"]);
    }

    #[test]
    fn with_constraints_rejects_bad_lengths() {
        let source = scenario_source();

        assert!(matches!(
            Solver::with_constraints(5, &source, "", &["", ""], "", "*****"),
            Err(SolverError::LengthMismatch { actual: 2, .. })
        ));
        assert!(matches!(
            Solver::with_constraints::<&str>(5, &source, "", &["", "", "", "", ""], "", "**"),
            Err(SolverError::LengthMismatch { actual: 2, .. })
        ));
    }

    #[test]
    fn source_is_not_mutated() {
        let source = scenario_source();
        let snapshot = source.clone();
        let mut solver = Solver::new(5, &source);
        solver.apply_feedback("crane", "bbbbb").unwrap();

        assert_eq!(solver.source(), &snapshot);
    }

    #[test]
    fn solver_length_governs_matching() {
        let source = WordSource::from_words(["cat", "dog"], 3);
        let solver = Solver::new(5, &source);

        assert!(solver.candidates().is_empty());
        assert_eq!(solver.eliminating_guess(), "");
    }
}

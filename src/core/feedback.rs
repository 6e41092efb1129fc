//! Per-position color feedback for a guess
//!
//! Feedback is typed as one symbol per letter of the guess:
//! - `g` = Green (letter confirmed at this position)
//! - `y` = Yellow (letter present, wrong position)
//! - `b` = Black (letter absent)
//!
//! Any other symbol is kept as [`Mark::Ignored`] and produces no constraint update.

use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
    Ignored,
}

impl Mark {
    /// Parse a feedback symbol, case-insensitive
    #[must_use]
    pub const fn from_char(symbol: char) -> Self {
        match symbol.to_ascii_lowercase() {
            'g' => Self::Green,
            'y' => Self::Yellow,
            'b' => Self::Black,
            _ => Self::Ignored,
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
            Self::Ignored => '·',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Parse a color code string like "bygbb"
    ///
    /// Never fails: unknown symbols become [`Mark::Ignored`].
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("gYb?b");
    /// assert_eq!(feedback.len(), 5);
    /// assert_eq!(feedback.marks()[1], Mark::Yellow);
    /// assert_eq!(feedback.marks()[3], Mark::Ignored);
    /// ```
    #[must_use]
    pub fn parse(code: &str) -> Self {
        Self(code.chars().map(Mark::from_char).collect())
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Green)
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Color a single letter tile the way the game shows it
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Green => tile.black().on_green().bold(),
        Mark::Yellow => tile.black().on_yellow().bold(),
        Mark::Black => tile.white().on_bright_black(),
        Mark::Ignored => tile.normal(),
    }
}

/// Render a guess as colored tiles according to its feedback code
#[must_use]
pub fn feedback_tiles(guess: &str, code: &str) -> String {
    let feedback = Feedback::parse(code);
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| letter_tile(letter, mark).to_string())
        .collect()
}

/// Join candidates for display, noting how many of `total` were left out
#[must_use]
pub fn candidate_list(shown: &[&str], total: usize) -> String {
    let mut line = shown.join(", ");
    if total > shown.len() {
        line.push_str(&format!(" … (+{} more)", total - shown.len()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_contain_each_letter() {
        colored::control::set_override(false);
        let tiles = feedback_tiles("crane", "gybb?");
        assert_eq!(tiles, " C  R  A  N  E ");
    }

    #[test]
    fn tiles_stop_at_shorter_input() {
        colored::control::set_override(false);
        assert_eq!(feedback_tiles("crane", "gg"), " C  R ");
    }

    #[test]
    fn candidate_list_short() {
        assert_eq!(candidate_list(&["crane", "slate"], 2), "crane, slate");
    }

    #[test]
    fn candidate_list_truncates() {
        let list = candidate_list(&["a", "b"], 4);
        assert_eq!(list, "a, b … (+2 more)");
    }

    #[test]
    fn candidate_list_empty() {
        assert_eq!(candidate_list(&[], 0), "");
    }
}

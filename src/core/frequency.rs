//! English letter frequency weights
//!
//! Static weights used to rank candidate words for elimination guesses.
//! Only distinct letters count, so a word with repeated letters scores lower
//! than one covering more of the alphabet.

use rustc_hash::FxHashSet;

/// Weight of each letter A-Z, indexed by `letter - b'A'`
pub const LETTER_WEIGHTS: [f64; 26] = [
    43.31, // A
    10.56, // B
    23.13, // C
    17.25, // D
    56.88, // E
    9.24,  // F
    12.59, // G
    15.31, // H
    38.45, // I
    1.00,  // J
    5.61,  // K
    27.98, // L
    15.36, // M
    33.92, // N
    36.51, // O
    16.14, // P
    1.00,  // Q
    38.64, // R
    29.23, // S
    35.43, // T
    18.51, // U
    5.13,  // V
    6.57,  // W
    1.48,  // X
    9.06,  // Y
    1.39,  // Z
];

/// Weight of a single letter, case-insensitive
///
/// Characters outside A-Z weigh nothing.
#[inline]
#[must_use]
pub fn letter_weight(letter: char) -> f64 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_WEIGHTS[(upper as u8 - b'A') as usize]
    } else {
        0.0
    }
}

/// Sum the weights of the distinct letters in `word`
///
/// # Examples
/// ```
/// use wordle_assist::core::frequency_score;
///
/// assert_eq!(frequency_score("ABBA"), frequency_score("ab"));
/// assert!(frequency_score("crane") > frequency_score("shard"));
/// ```
#[must_use]
pub fn frequency_score(word: &str) -> f64 {
    let distinct: FxHashSet<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    distinct.into_iter().map(letter_weight).sum()
}

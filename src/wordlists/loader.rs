//! Word list loading
//!
//! A [`WordSource`] is the dictionary the solver filters over: every line of a
//! one-word-per-line file whose length matches the configured word length, in file order.

use crate::core::SolverError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Label used in errors for sources that are not files
const READER_LABEL: &str = "<reader>";

/// Ordered, immutable list of words of a single length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    word_length: usize,
    words: Vec<String>,
}

impl WordSource {
    /// Load words of `length` characters from a file
    ///
    /// Lines of any other length are discarded. No deduplication or case
    /// normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SourceUnavailable`] carrying the path if the file cannot be
    /// opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_assist::wordlists::WordSource;
    ///
    /// let source = WordSource::load("20k.txt", 5).unwrap();
    /// println!("Loaded {} words", source.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P, length: usize) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SolverError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Self::read_filtered(BufReader::new(file), length, path)?;
        debug!(path = %path.display(), words = source.len(), length, "loaded word list");
        Ok(source)
    }

    /// Read words of `length` characters from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SourceUnavailable`] if reading fails part way.
    pub fn from_reader<R: BufRead>(reader: R, length: usize) -> Result<Self, SolverError> {
        Self::read_filtered(reader, length, Path::new(READER_LABEL))
    }

    /// Build a source from in-memory words, applying the same length filter
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(["crane", "toolong", "abc", "slate"], 5);
    /// assert_eq!(source.words(), ["crane", "slate"]);
    /// ```
    pub fn from_words<I, S>(words: I, length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| word.chars().count() == length)
            .collect();

        Self {
            word_length: length,
            words,
        }
    }

    fn read_filtered<R: BufRead>(
        reader: R,
        length: usize,
        path: &Path,
    ) -> Result<Self, SolverError> {
        let mut words = Vec::new();
        let mut discarded = 0usize;

        for line in reader.lines() {
            let line = line.map_err(|source| SolverError::SourceUnavailable {
                path: PathBuf::from(path),
                source,
            })?;

            if line.chars().count() == length {
                words.push(line);
            } else {
                discarded += 1;
            }
        }

        debug!(kept = words.len(), discarded, length, "filtered word list");

        Ok(Self {
            word_length: length,
            words,
        })
    }

    /// The length every word in this source has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate the words in source order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a WordSource {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

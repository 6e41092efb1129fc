//! Error kinds raised by the word source and the solver

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for word loading and constraint updates
#[derive(Debug)]
pub enum SolverError {
    /// The word list could not be opened or read
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// A bulk constraint input did not have one entry per position
    LengthMismatch { expected: usize, actual: usize },
    /// A single-position update named a position past the end of the word
    PositionOutOfRange { position: usize, length: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "Could not open {}: {source}", path.display())
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Input must have length {expected}, got {actual}")
            }
            Self::PositionOutOfRange { position, length } => {
                write!(
                    f,
                    "Position {position} out of range, must be 0-{}",
                    length.saturating_sub(1)
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_length_mismatch() {
        let err = SolverError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Input must have length 5, got 3");
    }

    #[test]
    fn display_position_out_of_range() {
        let err = SolverError::PositionOutOfRange {
            position: 7,
            length: 5,
        };
        assert_eq!(err.to_string(), "Position 7 out of range, must be 0-4");
    }

    #[test]
    fn source_unavailable_carries_path_and_cause() {
        let err = SolverError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Could not open missing.txt"));
        assert!(err.source().is_some());
    }
}

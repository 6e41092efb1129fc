//! Wordle Assistant
//!
//! Narrows a dictionary with letter-position constraints built from color feedback, and
//! suggests guesses ranked by distinct-letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::solver::Solver;
//! use wordle_assist::wordlists::WordSource;
//!
//! let source = WordSource::from_words(["crane", "slate", "print", "shard"], 5);
//! let mut solver = Solver::new(5, &source);
//!
//! assert_eq!(solver.eliminating_guess(), "crane");
//!
//! // Feedback for CRANE: all letters absent
//! solver.apply_feedback("crane", "bbbbb").unwrap();
//! assert_eq!(solver.eliminating_guess(), "");
//! ```

// Core domain types
pub mod core;

// Constraint solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

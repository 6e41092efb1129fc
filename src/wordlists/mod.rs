//! Word lists for the assistant
//!
//! Dictionaries are plain text, one word per line, loaded at startup.

pub mod loader;

pub use loader::WordSource;

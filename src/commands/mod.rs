//! Command implementations

pub mod session;
pub mod suggest;

pub use session::{SessionOutcome, run_interactive, run_session};
pub use suggest::{SuggestConfig, SuggestReport, run_suggest};

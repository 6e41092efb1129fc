//! Interactive console session
//!
//! Line based loop: suggest a guess, read the color code typed back, fold it into
//! the solver, repeat.

use crate::core::Feedback;
use crate::output::formatters::feedback_tiles;
use crate::solver::{Solver, StrategyType};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of feedback codes applied
    pub turns: usize,
    /// The last feedback was all green
    pub solved: bool,
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

/// Print `prompt` and read one trimmed line
///
/// Returns `None` at end of input.
fn prompt_line<W: Write>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    lines
        .next()
        .transpose()
        .context("failed to read input")
        .map(|line| line.map(|l| l.trim().to_string()))
}

/// Run the interactive session until the user quits, input ends, or the word is solved
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    solver: &mut Solver<'_>,
    input: R,
    mut output: W,
) -> Result<SessionOutcome> {
    let length = solver.word_length();
    let mut lines = input.lines();
    let mut outcome = SessionOutcome {
        turns: 0,
        solved: false,
    };

    writeln!(
        output,
        "{}",
        format!("Wordle assistant ({length} letters)").bright_cyan().bold()
    )?;
    writeln!(
        output,
        "Feedback codes: g = green, y = yellow, b = black. Type 'quit' to exit.\n"
    )?;

    loop {
        write!(
            output,
            "Current confidence: {}. {} candidates remaining. ",
            solver.confidence(),
            solver.count_candidates()
        )?;

        let Some(kind) = prompt_line(&mut lines, &mut output, "Enter guess type (e/g)")? else {
            return Ok(outcome);
        };
        if is_quit(&kind) {
            return Ok(outcome);
        }

        let strategy = StrategyType::from_name(&kind);
        let suggestions = solver.suggest(&strategy);
        let Some(guess) = suggestions.first().filter(|g| !g.is_empty()).cloned() else {
            warn!(pattern = %solver.constraints().pattern_string(), "no candidates remain");
            writeln!(output, "{}", "No matches".red())?;
            continue;
        };

        info!(strategy = strategy.name(), %guess, "suggested guess");
        writeln!(output, "Guess: {}", guess.bright_yellow().bold())?;

        let code = loop {
            let Some(code) = prompt_line(&mut lines, &mut output, "Enter square color code")?
            else {
                return Ok(outcome);
            };
            if is_quit(&code) {
                return Ok(outcome);
            }
            if code.chars().count() == length {
                break code;
            }
            writeln!(output, "Must be length {length}")?;
        };

        solver.apply_feedback(&guess, &code)?;
        outcome.turns += 1;
        writeln!(output, "{}", feedback_tiles(&guess, &code))?;

        if Feedback::parse(&code).is_solved() {
            outcome.solved = true;
            writeln!(
                output,
                "{}",
                format!("🎉 Solved in {} turns: {guess}", outcome.turns)
                    .bright_green()
                    .bold()
            )?;
            return Ok(outcome);
        }
    }
}

/// Run the interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_interactive(solver: &mut Solver<'_>) -> Result<SessionOutcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(solver, stdin.lock(), stdout.lock())
}

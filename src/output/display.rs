//! Display functions for command results

use super::formatters::candidate_list;
use crate::commands::SuggestReport;
use colored::Colorize;

/// Print the result of a one-shot suggestion
pub fn print_suggest_report(report: &SuggestReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUGGESTION:".bright_cyan().bold(),
        report.strategy.bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n📋 Pattern:          {}", report.pattern.bright_white());
    println!("   Candidates:       {}", report.candidate_count);
    println!("   Confidence:       {}", report.confidence);

    let shown = report.suggestions.join(", ");
    if shown.is_empty() {
        println!("\n{}", "❌ No matches".red().bold());
    } else {
        println!(
            "\n💡 Suggested guess: {}",
            shown.to_uppercase().bright_yellow().bold()
        );
    }

    if let Some(candidates) = &report.candidates {
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        println!("\nRemaining candidates:");
        println!("  {}", candidate_list(&refs, refs.len()));
    } else if report.candidate_count > 1 {
        let refs: Vec<&str> = report.preview.iter().map(String::as_str).collect();
        println!("\nRemaining candidates:");
        println!("  {}", candidate_list(&refs, report.candidate_count));
    }
}

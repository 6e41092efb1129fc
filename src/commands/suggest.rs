//! One-shot suggestion command
//!
//! Builds a solver from constraints given up front and reports its suggestion.

use crate::core::SolverError;
use crate::solver::{PATTERN_WILDCARD, Solver, StrategyType};
use crate::wordlists::WordSource;
use tracing::info;

/// Number of candidates kept for a preview
pub const PREVIEW_LEN: usize = 10;

/// Constraints and options for a one-shot suggestion
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    pub excluded: String,
    /// Comma separated letter sets, one field per position
    pub position_exclusions: Option<String>,
    pub required: String,
    /// Fixed pattern with `*` wildcards, all wildcards when absent
    pub pattern: Option<String>,
    pub strategy: StrategyType,
    /// Include every candidate in the report
    pub list: bool,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            excluded: String::new(),
            position_exclusions: None,
            required: String::new(),
            pattern: None,
            strategy,
            list: false,
        }
    }
}

/// Result of a one-shot suggestion
#[derive(Debug, Clone)]
pub struct SuggestReport {
    pub strategy: &'static str,
    pub suggestions: Vec<String>,
    pub pattern: String,
    pub candidate_count: usize,
    pub confidence: usize,
    /// First few candidates in word list order
    pub preview: Vec<String>,
    pub candidates: Option<Vec<String>>,
}

/// Split a comma separated per-position list, e.g. `"s,,ai,,"`
///
/// An absent list means no exclusion at any position.
fn position_fields(fields: Option<&str>, length: usize) -> Vec<String> {
    fields.map_or_else(
        || vec![String::new(); length],
        |s| s.split(',').map(|f| f.trim().to_string()).collect(),
    )
}

/// Build a solver from `config` and report its suggestion
///
/// # Errors
///
/// Returns [`SolverError::LengthMismatch`] if the position exclusions or the pattern do not
/// cover exactly `length` positions.
pub fn run_suggest(
    length: usize,
    source: &WordSource,
    config: &SuggestConfig,
) -> Result<SuggestReport, SolverError> {
    let position_exclusions = position_fields(config.position_exclusions.as_deref(), length);
    let pattern = config
        .pattern
        .clone()
        .unwrap_or_else(|| PATTERN_WILDCARD.to_string().repeat(length));

    let solver = Solver::with_constraints(
        length,
        source,
        &config.excluded,
        &position_exclusions,
        &config.required,
        &pattern,
    )?;

    let suggestions = solver.suggest(&config.strategy);
    let candidates = solver.candidates();
    info!(
        strategy = config.strategy.name(),
        candidates = candidates.len(),
        suggestion = %suggestions.join(", "),
        "computed suggestion"
    );

    Ok(SuggestReport {
        strategy: config.strategy.name(),
        suggestions,
        pattern: solver.constraints().pattern_string(),
        candidate_count: candidates.len(),
        confidence: solver.confidence(),
        preview: candidates
            .iter()
            .take(PREVIEW_LEN)
            .map(ToString::to_string)
            .collect(),
        candidates: config
            .list
            .then(|| candidates.iter().map(ToString::to_string).collect()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> WordSource {
        WordSource::from_words(["crane", "slate", "print", "shard", "plate"], 5)
    }

    #[test]
    fn no_constraints_suggests_best_scoring_word() {
        let source = source();
        let config = SuggestConfig::new(StrategyType::from_name("e"));

        let report = run_suggest(5, &source, &config).unwrap();

        assert_eq!(report.suggestions, vec!["crane"]);
        assert_eq!(report.pattern, "*****");
        assert_eq!(report.candidate_count, 5);
        assert_eq!(report.confidence, 0);
        assert_eq!(report.preview.len(), 5);
        assert!(report.candidates.is_none());
    }

    #[test]
    fn constraints_are_applied() {
        let source = source();
        let mut config = SuggestConfig::new(StrategyType::from_name("g"));
        config.excluded = "c".to_string();
        config.position_exclusions = Some("s,,,,".to_string());
        config.required = "t".to_string();
        config.pattern = Some("**a**".to_string());
        config.list = true;

        let report = run_suggest(5, &source, &config).unwrap();

        assert_eq!(report.suggestions, vec!["plate"]);
        assert_eq!(report.pattern, "**a**");
        assert_eq!(report.candidates, Some(vec!["plate".to_string()]));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let source = source();
        let mut config = SuggestConfig::new(StrategyType::from_name("e"));
        config.position_exclusions = Some("s,,".to_string());

        assert!(matches!(
            run_suggest(5, &source, &config),
            Err(SolverError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn wrong_pattern_length_is_rejected() {
        let source = source();
        let mut config = SuggestConfig::new(StrategyType::from_name("e"));
        config.pattern = Some("*a*".to_string());

        assert!(matches!(
            run_suggest(5, &source, &config),
            Err(SolverError::LengthMismatch { actual: 3, .. })
        ));
    }

    #[test]
    fn no_match_reports_sentinel() {
        let source = source();
        let mut config = SuggestConfig::new(StrategyType::from_name("e"));
        config.required = "z".to_string();

        let report = run_suggest(5, &source, &config).unwrap();

        assert_eq!(report.suggestions, vec![String::new()]);
        assert_eq!(report.candidate_count, 0);
        assert!(report.preview.is_empty());
    }

    #[test]
    fn position_fields_default_to_empty() {
        assert_eq!(position_fields(None, 3), vec!["", "", ""]);
        assert_eq!(position_fields(Some("a, b ,"), 3), vec!["a", "b", ""]);
    }
}

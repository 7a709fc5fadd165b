use crate::engine::{self, PatternLibrary};
use once_cell::sync::Lazy;
use std::time::Duration;

static BUILTIN_LIBRARY: Lazy<PatternLibrary> = Lazy::new(|| {
    PatternLibrary::new(crate::patterns::builtin_patterns())
        .expect("built-in pattern library must validate")
});

/// The compiled built-in pattern library.
///
/// Compiled once per process on first use; handy as the library argument to
/// [`recognize_with`] when only the knobs need changing.
pub fn builtin_library() -> &'static PatternLibrary {
    &BUILTIN_LIBRARY
}

/// Knobs bounding a recognition run.
///
/// All three have safe defaults; the guarantees of [`recognize`] (at least
/// one candidate, every candidate spans the input) hold for any values.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Maximum candidates returned. Values below 1 are treated as 1.
    pub max_results: usize,
    /// Best partial covers remembered per input offset during enumeration.
    /// Values below 1 are treated as 1.
    pub beam_width: usize,
    /// Hard cap on enumeration steps. The walk never stops before its
    /// first complete cover, so even 0 yields a result.
    pub step_budget: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            beam_width: 64,
            step_budget: 50_000,
        }
    }
}

/// One piece of a generated regex: the fragment emitted for a run of edges
/// and the input slice that run covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexPart {
    /// Pattern name, or `None` for escaped literal text.
    pub name: Option<String>,
    /// Slice of the original input this part covers.
    pub text: String,
    /// Regex fragment emitted for this part, quantifier included.
    pub fragment: String,
}

/// A ranked candidate regular expression.
#[derive(Debug, Clone)]
pub struct GeneratedRegex {
    /// The full regex, unanchored. Anchoring with `^(?:...)$` makes it
    /// match the input exactly.
    pub pattern: String,
    /// Decomposition into parts, in input order.
    pub parts: Vec<RegexPart>,
    /// Ranking score; higher means more specific.
    pub score: i64,
}

/// Result from [`recognize`] and [`recognize_with`].
#[derive(Debug, Clone)]
pub struct Recognition {
    /// The input text.
    pub text: String,
    /// Ranked candidates, best first. Never empty.
    pub results: Vec<GeneratedRegex>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Additional details returned by [`recognize_verbose_with`].
///
/// Intentionally compact: meant for debugging and performance inspection
/// without dumping internal state.
#[derive(Debug, Clone)]
pub struct RecognitionDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Match phase: regex scans over the input.
    pub matching: Duration,
    pub matches_found: usize,
    pub patterns_scanned: usize,
    pub patterns_skipped: usize,
    /// Lattice construction.
    pub lattice: Duration,
    pub lattice_edges: usize,
    pub literal_edges: usize,
    /// Cover enumeration.
    pub enumeration: Duration,
    pub steps: usize,
    pub covers_found: usize,
    pub pruned: usize,
    pub budget_exhausted: bool,
    /// Rendering, dedup, ordering and verification.
    pub ranking: Duration,
    pub covers_rendered: usize,
    pub duplicates_dropped: usize,
    /// Names of the patterns the input profile activated.
    pub active_patterns: Vec<String>,
}

/// Result from [`recognize_verbose_with`].
#[derive(Debug, Clone)]
pub struct RecognitionVerbose {
    pub text: String,
    pub results: Vec<GeneratedRegex>,
    pub elapsed: Duration,
    pub details: RecognitionDetails,
}

/// Recognize `text` using the built-in pattern library and default knobs.
///
/// Returns at least one candidate for any input, including the empty
/// string, and never panics on malformed or unusual text.
///
/// # Example
/// ```
/// use rexgen::recognize;
///
/// let out = recognize("2020-03-12");
/// assert_eq!(out.results[0].pattern, "[0-9]{4}-[0-9]{2}-[0-9]{2}");
/// ```
pub fn recognize(text: &str) -> Recognition {
    recognize_with(text, &BUILTIN_LIBRARY, &RecognizerConfig::default())
}

/// Recognize `text` against a caller-supplied library and knobs.
pub fn recognize_with(
    text: &str,
    library: &PatternLibrary,
    config: &RecognizerConfig,
) -> Recognition {
    let run = engine::Recognizer::new(text, library, config).run();

    Recognition {
        text: text.to_string(),
        results: run.results,
        elapsed: run.metrics.total,
    }
}

#[allow(dead_code)]
pub fn recognize_verbose(text: &str) -> RecognitionVerbose {
    recognize_verbose_with(text, &BUILTIN_LIBRARY, &RecognizerConfig::default())
}

/// Recognize `text` and return extra (compact) debug details.
///
/// Useful for profiling and pattern debugging; the plain [`recognize_with`]
/// path returns the same candidates without the trace.
pub fn recognize_verbose_with(
    text: &str,
    library: &PatternLibrary,
    config: &RecognizerConfig,
) -> RecognitionVerbose {
    let run = engine::Recognizer::new(text, library, config).run();
    let m = &run.metrics;

    let details = RecognitionDetails {
        total: m.total,
        matching: m.matching.duration,
        matches_found: m.matching.matches,
        patterns_scanned: m.matching.patterns_scanned,
        patterns_skipped: m.matching.patterns_skipped,
        lattice: m.lattice.duration,
        lattice_edges: m.lattice.edges,
        literal_edges: m.lattice.literal_edges,
        enumeration: m.enumeration.duration,
        steps: m.enumeration.steps,
        covers_found: m.enumeration.covers,
        pruned: m.enumeration.pruned,
        budget_exhausted: m.enumeration.budget_exhausted,
        ranking: m.ranking.duration,
        covers_rendered: m.ranking.rendered,
        duplicates_dropped: m.ranking.duplicates,
        active_patterns: run.active_patterns,
    };

    RecognitionVerbose {
        text: text.to_string(),
        results: run.results,
        elapsed: details.total,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternCategory;
    use regex::Regex;

    const LOG_LINE: &str =
        "2020-03-12T12:34:56.123 WARN  [org.olafneumann.test.Test]: This is a simple line";

    fn assert_spans(input: &str, candidate: &GeneratedRegex) {
        let re = Regex::new(&format!("^(?:{})$", candidate.pattern)).unwrap();
        assert!(
            re.is_match(input),
            "{:?} does not span {input:?}",
            candidate.pattern
        );
    }

    #[test]
    fn recognize_returns_ranked_full_matching_candidates() {
        let out = recognize(LOG_LINE);

        assert_eq!(out.text, LOG_LINE);
        assert_eq!(out.results.len(), 10);
        for candidate in &out.results {
            assert_spans(LOG_LINE, candidate);
        }
        for pair in out.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn the_top_log_line_candidate_combines_the_shaped_tokens() {
        let out = recognize(LOG_LINE);
        let top = &out.results[0];

        let names: Vec<_> = top.parts.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(
            names,
            vec![
                "iso8601 date time",
                "whitespace",
                "log level",
                "whitespace",
                "bracketed identifier",
                "punctuation",
                "free text",
            ]
        );
        assert_eq!(top.parts[0].text, "2020-03-12T12:34:56.123");
        assert_eq!(top.parts[4].text, "[org.olafneumann.test.Test]");
        assert_eq!(
            top.pattern,
            r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,9})?(?:Z|[+-][0-9]{2}:[0-9]{2})?\s+(?:TRACE|DEBUG|INFO|WARN|ERROR|FATAL)\s+\[[a-zA-Z0-9_$]+(?:\.[a-zA-Z0-9_$]+)*\][.,:;!?]+[a-zA-Z0-9 ]+"
        );
    }

    #[test]
    fn candidates_are_textually_distinct() {
        let out = recognize(LOG_LINE);
        let mut patterns: Vec<&str> = out.results.iter().map(|r| r.pattern.as_str()).collect();
        patterns.sort_unstable();
        patterns.dedup();

        assert_eq!(patterns.len(), out.results.len());
    }

    #[test]
    fn recognition_is_deterministic() {
        let first: Vec<(String, i64)> = recognize(LOG_LINE)
            .results
            .into_iter()
            .map(|r| (r.pattern, r.score))
            .collect();
        let second: Vec<(String, i64)> = recognize(LOG_LINE)
            .results
            .into_iter()
            .map(|r| (r.pattern, r.score))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_produces_exactly_one_empty_candidate() {
        let out = recognize("");

        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].pattern, "");
        assert!(out.results[0].parts.is_empty());
        assert_spans("", &out.results[0]);
    }

    #[test]
    fn unmatched_input_falls_back_to_an_escaped_literal() {
        let out = recognize("§§§");

        assert_eq!(out.results.len(), 1);
        assert_spans("§§§", &out.results[0]);
        assert!(out.results[0].parts.iter().all(|p| p.name.is_none()));
    }

    #[test]
    fn an_exact_single_pattern_input_yields_exactly_one_candidate() {
        let library = PatternLibrary::new(vec![pattern! {
            name: "word",
            category: PatternCategory::Text,
            fragment: r"[a-z]+",
            weight: 8,
        }])
        .unwrap();
        let out = recognize_with("hello", &library, &RecognizerConfig::default());

        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].pattern, "[a-z]+");
    }

    #[test]
    fn max_results_truncates_after_dedup() {
        let config = RecognizerConfig {
            max_results: 3,
            ..RecognizerConfig::default()
        };
        let out = recognize_with(LOG_LINE, builtin_library(), &config);

        assert_eq!(out.results.len(), 3);
    }

    #[test]
    fn adjacent_equal_matches_merge_into_a_quantifier() {
        let library = PatternLibrary::new(vec![pattern! {
            name: "letter",
            category: PatternCategory::Text,
            fragment: r"[a-z]",
            weight: 8,
        }])
        .unwrap();
        let out = recognize_with("abc", &library, &RecognizerConfig::default());

        assert_eq!(out.results[0].pattern, "(?:[a-z]){3}");
        assert_eq!(out.results[0].parts.len(), 1);
        assert_eq!(out.results[0].parts[0].text, "abc");
    }

    #[test]
    fn verbose_details_reflect_the_run() {
        let out = recognize_verbose_with(LOG_LINE, builtin_library(), &RecognizerConfig::default());

        assert_eq!(out.elapsed, out.details.total);
        assert!(out.details.matches_found > 0);
        assert!(out.details.lattice_edges > 0);
        assert!(out.details.covers_found >= out.results.len());
        assert_eq!(out.details.covers_rendered, out.details.covers_found);
        assert!(out.details.active_patterns.iter().any(|n| n == "log level"));
        assert!(out.details.patterns_skipped > 0);
    }
}

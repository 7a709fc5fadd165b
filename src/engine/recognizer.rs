//! Run orchestration.
//!
//! `Recognizer` ties the pipeline phases together for one input string and
//! stamps each phase's duration and counters into a [`RunMetrics`]. All
//! interesting logic lives in the phase modules; this file is glue.

use super::enumerate::CoverEnumerator;
use super::lattice::Lattice;
use super::library::PatternLibrary;
use super::matcher::find_matches;
use super::metrics::{
    EnumerationMetrics, LatticeMetrics, MatchMetrics, RankMetrics, RunMetrics, RunResult,
};
use super::profile::InputProfile;
use super::rank::rank;
use crate::CandidateCover;
use crate::api::RecognizerConfig;
use std::time::Instant;

pub(crate) struct Recognizer<'a> {
    input: &'a str,
    library: &'a PatternLibrary,
    config: RecognizerConfig,
}

impl<'a> Recognizer<'a> {
    pub(crate) fn new(
        input: &'a str,
        library: &'a PatternLibrary,
        config: &RecognizerConfig,
    ) -> Self {
        Self {
            input,
            library,
            config: config.clone(),
        }
    }

    pub(crate) fn run(self) -> RunResult {
        let run_start = Instant::now();
        let mut metrics = RunMetrics::default();

        let phase = Instant::now();
        let profile = InputProfile::scan(self.input);
        let scan = find_matches(self.input, self.library, &profile);
        metrics.matching = MatchMetrics {
            duration: phase.elapsed(),
            matches: scan.matches.len(),
            patterns_scanned: scan.active.len(),
            patterns_skipped: scan.skipped,
        };
        tracing::debug!(
            matches = scan.matches.len(),
            scanned = scan.active.len(),
            skipped = scan.skipped,
            "match phase done"
        );

        let phase = Instant::now();
        let lattice = Lattice::build(self.input, &scan.matches, self.library);
        metrics.lattice = LatticeMetrics {
            duration: phase.elapsed(),
            edges: lattice.edge_count(),
            literal_edges: lattice.literal_edge_count(),
        };
        tracing::debug!(
            edges = lattice.edge_count(),
            literals = lattice.literal_edge_count(),
            "lattice built"
        );

        let phase = Instant::now();
        let mut enumerator = CoverEnumerator::new(
            &lattice,
            self.library,
            self.config.beam_width,
            self.config.step_budget,
        );
        let covers: Vec<CandidateCover> = enumerator.by_ref().collect();
        debug_assert!(covers.iter().all(|cover| cover.spans(lattice.len())));
        metrics.enumeration = EnumerationMetrics {
            duration: phase.elapsed(),
            steps: enumerator.steps(),
            covers: covers.len(),
            pruned: enumerator.pruned(),
            budget_exhausted: enumerator.budget_exhausted(),
        };
        tracing::debug!(
            covers = covers.len(),
            steps = enumerator.steps(),
            pruned = enumerator.pruned(),
            exhausted = enumerator.budget_exhausted(),
            "enumeration done"
        );

        let phase = Instant::now();
        let outcome = rank(self.input, self.library, covers, self.config.max_results);
        metrics.ranking = RankMetrics {
            duration: phase.elapsed(),
            rendered: outcome.rendered,
            duplicates: outcome.duplicates,
            kept: outcome.results.len(),
        };
        tracing::debug!(
            kept = outcome.results.len(),
            duplicates = outcome.duplicates,
            "ranking done"
        );

        // The lattice is always connected, so at least one cover exists and
        // survives dedup.
        assert!(
            !outcome.results.is_empty(),
            "a recognition run must produce at least one candidate"
        );

        metrics.total = run_start.elapsed();
        RunResult {
            results: outcome.results,
            metrics,
            active_patterns: scan.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternCategory;

    #[test]
    fn an_empty_library_still_produces_a_literal_candidate() {
        let library = PatternLibrary::new(vec![]).unwrap();
        let result = Recognizer::new("a+b", &library, &RecognizerConfig::default()).run();

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].pattern, r"a\+b");
        assert!(result.active_patterns.is_empty());
    }

    #[test]
    fn metrics_reflect_the_phases() {
        let library = PatternLibrary::new(vec![pattern! {
            name: "number",
            category: PatternCategory::Number,
            fragment: r"[0-9]+",
            weight: 10,
        }])
        .unwrap();
        let result = Recognizer::new("4a2", &library, &RecognizerConfig::default()).run();

        assert_eq!(result.metrics.matching.patterns_scanned, 1);
        assert_eq!(result.metrics.matching.matches, 2);
        // number edges at 0 and 2, literals at 0, 1 and 2.
        assert_eq!(result.metrics.lattice.edges, 5);
        assert_eq!(result.metrics.lattice.literal_edges, 3);
        assert_eq!(result.metrics.enumeration.covers, 4);
        assert_eq!(result.metrics.ranking.kept, result.results.len());
        assert_eq!(result.active_patterns, vec!["number"]);
    }
}

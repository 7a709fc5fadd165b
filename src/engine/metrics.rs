//! Engine run metrics.
//!
//! A small set of structs used to observe and debug engine behavior, one per
//! pipeline phase plus a roll-up. Counters are collected unconditionally
//! (they are a handful of integer bumps); the verbose API and the CLI report
//! are the consumers.

use crate::GeneratedRegex;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct MatchMetrics {
    pub duration: Duration,
    /// Total occurrences across all patterns, overlaps included.
    pub matches: usize,
    pub patterns_scanned: usize,
    pub patterns_skipped: usize,
}

#[derive(Debug, Default, Clone)]
pub struct LatticeMetrics {
    pub duration: Duration,
    pub edges: usize,
    pub literal_edges: usize,
}

#[derive(Debug, Default, Clone)]
pub struct EnumerationMetrics {
    pub duration: Duration,
    pub steps: usize,
    pub covers: usize,
    pub pruned: usize,
    pub budget_exhausted: bool,
}

#[derive(Debug, Default, Clone)]
pub struct RankMetrics {
    pub duration: Duration,
    /// Covers rendered to candidate text.
    pub rendered: usize,
    /// Textual duplicates dropped.
    pub duplicates: usize,
    /// Candidates surviving dedup and truncation.
    pub kept: usize,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    pub total: Duration,
    pub matching: MatchMetrics,
    pub lattice: LatticeMetrics,
    pub enumeration: EnumerationMetrics,
    pub ranking: RankMetrics,
}

/// Everything a recognition run produces.
#[derive(Debug)]
pub struct RunResult {
    pub results: Vec<GeneratedRegex>,
    pub metrics: RunMetrics,
    /// Names of the patterns the input profile activated, in library order.
    pub active_patterns: Vec<String>,
}

//! Recognition engine.
//!
//! This module is the *internal entry point* for the regex inference engine.
//! The pipeline lives in focused submodules under `src/engine/` while keeping
//! stable crate-internal paths (for example `crate::engine::Recognizer` and
//! `crate::engine::CharClassMask`).
//!
//! ## How the parts work together
//!
//! At a high level, recognizing an input string is a pipeline:
//!
//! ```text
//! pattern defs ──┐
//!               │  PatternLibrary::new            (library.rs)
//!               └───────────────┬───────────────
//!                               │
//! input ── InputProfile::scan ──┼─ select active patterns (char classes)
//!         (profile.rs)          │
//!                               v
//!                     find_matches (matcher.rs)
//!                       - every occurrence, overlaps included
//!                       - zero-length matches rejected
//!                               │
//!                               v
//!                     Lattice::build (lattice.rs)
//!                       - edges over byte offsets
//!                       - literal fallback where no
//!                         multi-char match starts
//!                               │
//!                               v
//!                     CoverEnumerator (enumerate.rs)
//!                       - depth-first walk, beam per offset
//!                       - hard step budget
//!                       - running scores (score.rs)
//!                               │
//!                               v
//!                     render + rank (render.rs, rank.rs)
//!                       - quantifier merging, escaping
//!                       - textual dedup, ordering, truncation
//!                               │
//!                               v
//!                        Vec<GeneratedRegex>
//! ```
//!
//! The engine leans on **exhaustive local matching**: every occurrence of
//! every active pattern becomes an edge, and the interesting work is choosing
//! good paths through the resulting lattice rather than being clever during
//! matching itself.
//!
//! ## Responsibilities by module
//!
//! - `library.rs`: validates and compiles `PatternDef`s into a
//!   `PatternLibrary` (identity, weight and fragment checks).
//! - `profile.rs`: scans the raw input to compute coarse character classes
//!   for pattern activation.
//! - `matcher.rs`: finds all pattern occurrences, including overlapping ones.
//! - `lattice.rs`: arranges matches into a DAG over byte offsets and inserts
//!   single-character literal fallback edges.
//! - `enumerate.rs`: walks the lattice depth-first under a beam and a step
//!   budget, yielding complete covers.
//! - `score.rs`: the additive scoring model shared by the walk and the final
//!   ranking.
//! - `render.rs`: turns a cover into regex text plus its decomposition,
//!   merging adjacent same-pattern runs into quantifiers.
//! - `rank.rs`: dedups rendered candidates, orders them and enforces
//!   `max_results`, then verifies each survivor against the input.
//! - `recognizer.rs`: the orchestrator tying the phases together.
//! - `metrics.rs`: timing/debug data for runs and phases.
//!
//! ## Adding new patterns
//!
//! - Built-in patterns live under `src/patterns/**` and are collected by
//!   `patterns::builtin_patterns()`; custom ones go through
//!   `PatternLibrary::new(..)`.
//! - If a new pattern needs a new coarse trigger, add a `CharClassMask` bit
//!   and teach `InputProfile::scan` to set it.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug`/`trace` level at each phase
//! boundary; the CLI forwards `RUST_LOG` to a stderr subscriber.

#[path = "engine/enumerate.rs"]
mod enumerate;
#[path = "engine/lattice.rs"]
mod lattice;
#[path = "engine/library.rs"]
mod library;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/profile.rs"]
mod profile;
#[path = "engine/rank.rs"]
mod rank;
#[path = "engine/recognizer.rs"]
mod recognizer;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/score.rs"]
mod score;

#[allow(unused_imports)]
pub use library::{AtomicPattern, ConfigurationError, PatternLibrary};
#[allow(unused_imports)]
pub(crate) use metrics::{
    EnumerationMetrics, LatticeMetrics, MatchMetrics, RankMetrics, RunMetrics, RunResult,
};
#[allow(unused_imports)]
pub use profile::CharClassMask;
#[allow(unused_imports)]
pub(crate) use recognizer::Recognizer;

//! Cover scoring.
//!
//! A cover's score is additive over its edges, which lets the enumerator
//! carry a running total and reuse it as the final score:
//!
//! ```text
//! score(cover) = Σ weight(pattern edges)
//!              − LITERAL_PENALTY · #literal edges
//!              − SEGMENT_PENALTY · #edges
//! ```
//!
//! The per-edge segment penalty pushes toward fewer, longer segments, so a
//! single pattern spanning a region beats a chain of small ones with the
//! same total weight. The literal penalty makes fallback edges strictly
//! negative; combined with the library invariant that weights are positive,
//! an all-literal cover can never outscore a cover that replaces at least
//! one of its literals with a real match over the same region.

use super::library::PatternLibrary;
use crate::{EdgeKind, LatticeEdge};

/// Flat charge per literal fallback edge, on top of the segment penalty.
pub(crate) const LITERAL_PENALTY: i64 = 15;

/// Flat charge per edge, pattern or literal.
pub(crate) const SEGMENT_PENALTY: i64 = 8;

/// Contribution of a single edge to its cover's score.
pub(crate) fn edge_score(edge: &LatticeEdge, library: &PatternLibrary) -> i64 {
    match edge.kind {
        EdgeKind::Pattern(id) => i64::from(library.get(id).weight()) - SEGMENT_PENALTY,
        EdgeKind::Literal => -LITERAL_PENALTY - SEGMENT_PENALTY,
    }
}

/// Score of a whole edge sequence. The enumerator accumulates this
/// incrementally; this form exists for tests and spot checks.
#[cfg(test)]
pub(crate) fn cover_score(edges: &[LatticeEdge], library: &PatternLibrary) -> i64 {
    edges.iter().map(|e| edge_score(e, library)).sum()
}

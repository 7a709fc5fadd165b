//! Cover enumeration.
//!
//! A depth-first walk over the lattice from offset `0` toward offset `N`,
//! driven by an explicit stack of partial covers. Two bounds keep the walk
//! out of combinatorial trouble:
//!
//! - **Beam**: each offset remembers the best `beam_width` running scores
//!   that were admitted through it. A partial cover reaching an offset whose
//!   beam is full of strictly better arrivals is dropped on the spot. The
//!   first arrival at an offset is always admitted, so the walk's first
//!   descent can never be pruned away.
//! - **Step budget**: a hard cap on stack pops. Once spent, the walk stops
//!   and whatever covers were already yielded stand, except that the walk
//!   never stops before its first complete cover. Since every offset below
//!   `N` has an outgoing edge, that first cover arrives within `N` pops.
//!
//! Edges at each offset are expanded in the lattice's fixed order (pushed in
//! reverse so the stack pops them in order), which makes the yield sequence
//! a pure function of the lattice and the two bounds.

use super::lattice::Lattice;
use super::library::PatternLibrary;
use super::score::edge_score;
use crate::{CandidateCover, LatticeEdge};

/// A partial cover: contiguous edges from offset `0` up to `position`.
struct PartialCover {
    position: usize,
    score: i64,
    edges: Vec<LatticeEdge>,
}

pub(crate) struct CoverEnumerator<'a> {
    lattice: &'a Lattice,
    library: &'a PatternLibrary,
    stack: Vec<PartialCover>,
    /// Admitted running scores per offset, each kept sorted ascending and
    /// capped at `beam_width`.
    beams: Vec<Vec<i64>>,
    beam_width: usize,
    step_budget: usize,
    steps: usize,
    pruned: usize,
    yielded: usize,
    budget_exhausted: bool,
}

impl<'a> CoverEnumerator<'a> {
    pub(crate) fn new(
        lattice: &'a Lattice,
        library: &'a PatternLibrary,
        beam_width: usize,
        step_budget: usize,
    ) -> Self {
        Self {
            lattice,
            library,
            stack: vec![PartialCover {
                position: 0,
                score: 0,
                edges: Vec::new(),
            }],
            beams: vec![Vec::new(); lattice.len() + 1],
            beam_width: beam_width.max(1),
            step_budget,
            steps: 0,
            pruned: 0,
            yielded: 0,
            budget_exhausted: false,
        }
    }

    /// Records `score` in the beam at `offset`. Returns `false` when the
    /// beam is full of strictly better arrivals.
    fn admit(&mut self, offset: usize, score: i64) -> bool {
        let beam = &mut self.beams[offset];
        if beam.len() == self.beam_width {
            if score <= beam[0] {
                return false;
            }
            beam.remove(0);
        }
        let at = beam.partition_point(|&s| s < score);
        beam.insert(at, score);
        true
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    pub(crate) fn pruned(&self) -> usize {
        self.pruned
    }

    pub(crate) fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }
}

impl Iterator for CoverEnumerator<'_> {
    type Item = CandidateCover;

    fn next(&mut self) -> Option<CandidateCover> {
        while let Some(partial) = self.stack.pop() {
            self.steps += 1;

            if partial.position == self.lattice.len() {
                self.yielded += 1;
                return Some(CandidateCover {
                    edges: partial.edges,
                    score: partial.score,
                });
            }

            if self.steps >= self.step_budget && self.yielded > 0 {
                self.budget_exhausted = true;
                self.stack.clear();
                tracing::debug!(
                    steps = self.steps,
                    covers = self.yielded,
                    "step budget exhausted, stopping enumeration"
                );
                return None;
            }

            for edge in self.lattice.outgoing(partial.position).iter().rev() {
                let score = partial.score + edge_score(edge, self.library);
                if !self.admit(edge.span.end, score) {
                    self.pruned += 1;
                    continue;
                }
                let mut edges = partial.edges.clone();
                edges.push(*edge);
                self.stack.push(PartialCover {
                    position: edge.span.end,
                    score,
                    edges,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::find_matches;
    use crate::engine::profile::InputProfile;
    use crate::engine::score::cover_score;
    use crate::{EdgeKind, PatternCategory, PatternDef};

    fn library(defs: Vec<PatternDef>) -> PatternLibrary {
        PatternLibrary::new(defs).unwrap()
    }

    fn lattice(input: &str, library: &PatternLibrary) -> Lattice {
        let scan = find_matches(input, library, &InputProfile::scan(input));
        Lattice::build(input, &scan.matches, library)
    }

    fn word_and_alpha() -> PatternLibrary {
        library(vec![
            pattern! {
                name: "word",
                category: PatternCategory::Text,
                fragment: r"[a-z]+",
                weight: 8,
            },
            pattern! {
                name: "alpha",
                category: PatternCategory::Text,
                fragment: r"[a-z]",
                weight: 5,
            },
        ])
    }

    fn covers(
        input: &str,
        library: &PatternLibrary,
        beam: usize,
        budget: usize,
    ) -> Vec<CandidateCover> {
        let lattice = lattice(input, library);
        CoverEnumerator::new(&lattice, library, beam, budget).collect()
    }

    #[test]
    fn every_yielded_cover_spans_the_input() {
        let library = word_and_alpha();
        let found = covers("ab", &library, 64, 50_000);

        assert!(!found.is_empty());
        for cover in &found {
            assert!(cover.spans(2));
        }
    }

    #[test]
    fn enumerates_all_paths_when_bounds_are_loose() {
        let library = word_and_alpha();
        // "ab": [word(ab)], [alpha(a) word(b)], [alpha(a) alpha(b)],
        // [alpha(a) lit(b)]. No literal leaves offset 0.
        let found = covers("ab", &library, 64, 50_000);

        assert_eq!(found.len(), 4);
    }

    #[test]
    fn first_cover_follows_the_walk_order() {
        let library = word_and_alpha();
        let lattice = lattice("ab", &library);
        let first = CoverEnumerator::new(&lattice, &library, 64, 50_000)
            .next()
            .unwrap();

        // Highest-weight edge at offset 0 spans the whole input.
        assert_eq!(first.edges.len(), 1);
        assert_eq!(first.edges[0].kind, EdgeKind::Pattern(0));
    }

    #[test]
    fn running_scores_match_a_recomputation() {
        let library = word_and_alpha();
        for cover in covers("ab", &library, 64, 50_000) {
            assert_eq!(cover.score, cover_score(&cover.edges, &library));
        }
    }

    #[test]
    fn narrow_beam_prunes_low_scoring_arrivals() {
        let library = word_and_alpha();
        let all = covers("ab", &library, 64, 50_000);
        let pruned = covers("ab", &library, 1, 50_000);

        assert!(pruned.len() < all.len());
        // The surviving cover is the best-scoring one.
        let best = all.iter().map(|c| c.score).max().unwrap();
        assert_eq!(pruned[0].score, best);
    }

    #[test]
    fn exhausted_budget_still_yields_at_least_one_cover() {
        let library = word_and_alpha();
        let lattice = lattice("abcdefgh", &library);
        let mut enumerator = CoverEnumerator::new(&lattice, &library, 64, 1);
        let found: Vec<_> = enumerator.by_ref().collect();

        assert_eq!(found.len(), 1);
        assert!(found[0].spans(8));
        assert!(enumerator.budget_exhausted());
    }

    #[test]
    fn empty_input_yields_exactly_one_empty_cover() {
        let library = word_and_alpha();
        let found = covers("", &library, 64, 50_000);

        assert_eq!(found.len(), 1);
        assert!(found[0].edges.is_empty());
        assert_eq!(found[0].score, 0);
    }

    #[test]
    fn yield_order_is_deterministic() {
        let library = word_and_alpha();
        let first: Vec<_> = covers("abc", &library, 8, 50_000)
            .iter()
            .map(|c| (c.score, c.edges.clone()))
            .collect();
        let second: Vec<_> = covers("abc", &library, 8, 50_000)
            .iter()
            .map(|c| (c.score, c.edges.clone()))
            .collect();

        assert_eq!(first, second);
    }
}

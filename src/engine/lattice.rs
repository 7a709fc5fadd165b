//! Lattice construction.
//!
//! Matches are arranged into a directed acyclic graph whose nodes are byte
//! offsets into the input and whose edges are matches (or literal fallback
//! steps) connecting a start offset to an end offset:
//!
//! ```text
//! input:  ab12
//!
//!         0 ──word("ab")──▶ 2 ──number("12")──▶ 4
//!         0 ──lit("a")──▶ 1 ──lit("b")──▶ 2 ──lit("1")──▶ 3 ──lit("2")──▶ 4
//!                              └─number("2") from 3──▶ 4   (overlap match)
//! ```
//!
//! A literal fallback edge covers exactly one character and is inserted at
//! offset `i` only when no *multi-character* match starts at `i`. Single
//! character pattern matches do not suppress the literal at their offset:
//! suppressing there could disconnect the graph for a caller-supplied
//! library, and the scorer already prefers the pattern edge.
//!
//! Because every char-boundary offset below `len` therefore has at least one
//! outgoing edge, a path from `0` to `len` always exists and the downstream
//! walk never dead-ends.

use super::library::PatternLibrary;
use crate::{EdgeKind, LatticeEdge, PatternMatch, Span};
use std::cmp::Reverse;

pub(crate) struct Lattice {
    len: usize,
    /// Outgoing edges indexed by start offset, in fixed walk order.
    /// Offsets inside a multi-byte character stay empty.
    edges_at: Vec<Vec<LatticeEdge>>,
    literal_edges: usize,
}

impl Lattice {
    pub(crate) fn build(input: &str, matches: &[PatternMatch], library: &PatternLibrary) -> Self {
        let len = input.len();
        let mut edges_at: Vec<Vec<LatticeEdge>> = vec![Vec::new(); len + 1];
        let mut multi_char_start = vec![false; len + 1];

        for m in matches {
            if spans_multiple_chars(input, m.span) {
                multi_char_start[m.span.start] = true;
            }
            edges_at[m.span.start].push(LatticeEdge {
                span: m.span,
                kind: EdgeKind::Pattern(m.pattern),
            });
        }

        let mut literal_edges = 0;
        for (i, ch) in input.char_indices() {
            if multi_char_start[i] {
                continue;
            }
            edges_at[i].push(LatticeEdge {
                span: Span {
                    start: i,
                    end: i + ch.len_utf8(),
                },
                kind: EdgeKind::Literal,
            });
            literal_edges += 1;
        }

        // Fixed walk order per offset: pattern edges by weight (high first)
        // then name, literal last. Everything downstream inherits its
        // determinism from this ordering.
        for bucket in &mut edges_at {
            bucket.sort_by(|a, b| {
                let key = |e: &LatticeEdge| match e.kind {
                    EdgeKind::Pattern(id) => {
                        let p = library.get(id);
                        (0u8, Reverse(p.weight()), p.name())
                    }
                    EdgeKind::Literal => (1u8, Reverse(0), ""),
                };
                key(a).cmp(&key(b))
            });
        }

        Self {
            len,
            edges_at,
            literal_edges,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn outgoing(&self, offset: usize) -> &[LatticeEdge] {
        &self.edges_at[offset]
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges_at.iter().map(Vec::len).sum()
    }

    pub(crate) fn literal_edge_count(&self) -> usize {
        self.literal_edges
    }
}

/// True when `span` covers two or more characters of `input`.
fn spans_multiple_chars(input: &str, span: Span) -> bool {
    if span.len() < 2 {
        return false;
    }
    match input[span.start..span.end].chars().next() {
        Some(ch) => span.start + ch.len_utf8() < span.end,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::find_matches;
    use crate::engine::profile::InputProfile;
    use crate::{PatternCategory, PatternDef};

    fn library(defs: Vec<PatternDef>) -> PatternLibrary {
        PatternLibrary::new(defs).unwrap()
    }

    fn build(input: &str, library: &PatternLibrary) -> Lattice {
        let scan = find_matches(input, library, &InputProfile::scan(input));
        Lattice::build(input, &scan.matches, library)
    }

    fn number_and_word() -> PatternLibrary {
        library(vec![
            pattern! {
                name: "number",
                category: PatternCategory::Number,
                fragment: r"[0-9]+",
                weight: 10,
            },
            pattern! {
                name: "word",
                category: PatternCategory::Text,
                fragment: r"[a-zA-Z]+",
                weight: 8,
            },
        ])
    }

    #[test]
    fn multi_char_match_suppresses_literal_at_its_start() {
        let library = number_and_word();
        let lattice = build("ab12", &library);

        // "ab" (word) starts at 0, so no literal leaves 0.
        assert!(
            lattice
                .outgoing(0)
                .iter()
                .all(|e| e.kind != EdgeKind::Literal)
        );
        // "b" (word, single char) starts at 1; the literal stays.
        assert!(
            lattice
                .outgoing(1)
                .iter()
                .any(|e| e.kind == EdgeKind::Literal)
        );
    }

    #[test]
    fn single_char_match_keeps_its_literal_fallback() {
        let library = number_and_word();
        let lattice = build("7", &library);

        let kinds: Vec<EdgeKind> = lattice.outgoing(0).iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EdgeKind::Pattern(0), EdgeKind::Literal]);
    }

    #[test]
    fn every_offset_below_len_has_an_outgoing_edge() {
        let library = number_and_word();
        let input = "a§7 %";
        let lattice = build(input, &library);

        for (i, _) in input.char_indices() {
            assert!(!lattice.outgoing(i).is_empty(), "no edge at offset {i}");
        }
    }

    #[test]
    fn literal_edges_cover_whole_characters() {
        let library = number_and_word();
        let input = "§x";
        let lattice = build(input, &library);

        let first = &lattice.outgoing(0)[0];
        assert_eq!(first.kind, EdgeKind::Literal);
        assert_eq!(first.span, Span { start: 0, end: 2 });
    }

    #[test]
    fn empty_input_yields_an_edgeless_lattice() {
        let library = number_and_word();
        let lattice = build("", &library);

        assert_eq!(lattice.len(), 0);
        assert_eq!(lattice.edge_count(), 0);
    }

    #[test]
    fn walk_order_is_weight_then_name_with_literal_last() {
        let library = library(vec![
            pattern! {
                name: "beta",
                category: PatternCategory::Text,
                fragment: r"[a-z]+",
                weight: 8,
            },
            pattern! {
                name: "alpha",
                category: PatternCategory::Text,
                fragment: r"[a-z]",
                weight: 8,
            },
            pattern! {
                name: "strong",
                category: PatternCategory::Text,
                fragment: r"ab",
                weight: 20,
            },
        ]);
        let lattice = build("ab", &library);

        let names: Vec<&str> = lattice
            .outgoing(0)
            .iter()
            .map(|e| match e.kind {
                EdgeKind::Pattern(id) => library.get(id).name(),
                EdgeKind::Literal => "<literal>",
            })
            .collect();
        assert_eq!(names, vec!["strong", "alpha", "beta"]);
    }
}

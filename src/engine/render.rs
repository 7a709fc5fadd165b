//! Rendering covers as regex text.
//!
//! A cover is a sequence of edges; rendering walks it left to right and
//! emits one fragment per *run* of equal edges:
//!
//! - `k ≥ 2` adjacent edges of the same pattern collapse into
//!   `(?:fragment){k}` rather than repeating the fragment `k` times.
//! - Adjacent literal edges merge into one literal part whose combined text
//!   is escaped in a single step.
//! - A run of one pattern edge emits the bare fragment, with no redundant
//!   grouping or `{1}`.
//!
//! Concatenating fragments is only sound because library fragments are
//! required to be concatenation-safe (no top-level alternation) and literal
//! text goes through `regex::escape`. The decomposition reported alongside
//! the regex has exactly one entry per run, pairing the emitted fragment
//! with the input slice it covers.

use super::library::PatternLibrary;
use crate::{CandidateCover, EdgeKind, RegexPart};

pub(crate) fn render(
    input: &str,
    cover: &CandidateCover,
    library: &PatternLibrary,
) -> (String, Vec<RegexPart>) {
    let mut pattern = String::new();
    let mut parts = Vec::new();

    let mut edges = cover.edges.iter().peekable();
    while let Some(edge) = edges.next() {
        let start = edge.span.start;
        let mut end = edge.span.end;
        let mut count = 1usize;
        while let Some(next) = edges.peek() {
            if next.kind != edge.kind {
                break;
            }
            end = next.span.end;
            count += 1;
            edges.next();
        }

        let text = &input[start..end];
        let (name, fragment) = match edge.kind {
            EdgeKind::Pattern(id) => {
                let atom = library.get(id);
                let fragment = if count == 1 {
                    atom.fragment().to_string()
                } else {
                    format!("(?:{}){{{count}}}", atom.fragment())
                };
                (Some(atom.name().to_string()), fragment)
            }
            EdgeKind::Literal => (None, regex::escape(text)),
        };

        pattern.push_str(&fragment);
        parts.push(RegexPart {
            name,
            text: text.to_string(),
            fragment,
        });
    }

    (pattern, parts)
}

//! Candidate ordering, deduplication and verification.
//!
//! Covers arrive unordered from the walk. This phase renders each one,
//! sorts by score (descending, with the rendered text as a lexical
//! tie-break so equal scores still order deterministically), drops textual
//! duplicates keeping the first occurrence, and truncates to `max_results`.
//!
//! Every surviving candidate is then recompiled with anchors and checked
//! against the input. A candidate that fails to span the whole input can
//! only come from an engine defect, so the check fails loudly instead of
//! filtering quietly.

use super::library::PatternLibrary;
use super::render::render;
use crate::{CandidateCover, GeneratedRegex};
use regex::Regex;
use std::collections::HashSet;

pub(crate) struct RankOutcome {
    pub results: Vec<GeneratedRegex>,
    pub rendered: usize,
    pub duplicates: usize,
}

pub(crate) fn rank(
    input: &str,
    library: &PatternLibrary,
    covers: Vec<CandidateCover>,
    max_results: usize,
) -> RankOutcome {
    let max_results = max_results.max(1);

    let mut candidates: Vec<GeneratedRegex> = covers
        .iter()
        .map(|cover| {
            let (pattern, parts) = render(input, cover, library);
            GeneratedRegex {
                pattern,
                parts,
                score: cover.score,
            }
        })
        .collect();
    let rendered = candidates.len();

    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.pattern.cmp(&b.pattern))
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<GeneratedRegex> = Vec::new();
    let mut duplicates = 0;
    for candidate in candidates {
        if !seen.insert(candidate.pattern.clone()) {
            duplicates += 1;
            continue;
        }
        if results.len() < max_results {
            results.push(candidate);
        } else {
            break;
        }
    }

    for result in &results {
        verify_spans(input, result);
    }

    RankOutcome {
        results,
        rendered,
        duplicates,
    }
}

/// Recompiles `result` with anchors and checks it against the input.
fn verify_spans(input: &str, result: &GeneratedRegex) {
    let anchored = format!("^(?:{})$", result.pattern);
    let regex = match Regex::new(&anchored) {
        Ok(regex) => regex,
        Err(err) => panic!(
            "rendered candidate must recompile: {err} (pattern: {:?})",
            result.pattern
        ),
    };
    assert!(
        regex.is_match(input),
        "rendered candidate must span the whole input (pattern: {:?})",
        result.pattern
    );
}

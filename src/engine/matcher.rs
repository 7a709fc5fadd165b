//! Pattern matching over the raw input.
//!
//! For every active pattern, the matcher records the leftmost match at *each*
//! distinct start position, so overlapping occurrences are all found:
//!
//! ```text
//! input:    1.2.3        pattern: decimal  [0-9]*[.,][0-9]+
//!
//! scan at 0 ─ match "1.2" ─ restart at 1
//! scan at 1 ─ match ".2"  ─ restart at 2      (leftmost at-or-after 1)
//! scan at 2 ─ match "2.3" ─ restart at 3
//! scan at 3 ─ match ".3"  ─ restart at 4
//! scan at 4 ─ no match
//! ```
//!
//! Restarting one character past the previous match start (instead of past
//! its end) is what surfaces the overlapping `"2.3"` above; a stock
//! `find_iter` would have skipped it. Each pattern therefore contributes at
//! most one match per character position, which keeps the pass linear in
//! `patterns × positions`.
//!
//! Zero-length matches are discarded: they would add nothing to a cover and
//! could stall the downstream walk.

use super::library::PatternLibrary;
use super::profile::InputProfile;
use crate::{PatternMatch, Span};

/// Everything the match phase learned about the input.
pub(crate) struct MatchScan {
    /// All occurrences, grouped by pattern in library order and by start
    /// position within each pattern.
    pub matches: Vec<PatternMatch>,
    /// Names of the patterns that were actually scanned.
    pub active: Vec<String>,
    /// Patterns skipped by the input profile.
    pub skipped: usize,
}

pub(crate) fn find_matches(
    input: &str,
    library: &PatternLibrary,
    profile: &InputProfile,
) -> MatchScan {
    let mut matches = Vec::new();
    let mut active = Vec::new();
    let mut skipped = 0;

    for (id, pattern) in library.iter().enumerate() {
        if !profile.activates(pattern.classes()) {
            skipped += 1;
            continue;
        }
        active.push(pattern.name().to_string());

        let before = matches.len();
        let mut at = 0;
        while at <= input.len() {
            let Some(m) = pattern.regex.find_at(input, at) else {
                break;
            };
            if m.end() > m.start() {
                matches.push(PatternMatch {
                    pattern: id,
                    span: Span {
                        start: m.start(),
                        end: m.end(),
                    },
                });
            }
            // Restart one character past the match start so occurrences
            // overlapping this one are still discovered.
            let step = input[m.start()..].chars().next().map_or(1, char::len_utf8);
            at = m.start() + step;
        }

        if matches.len() > before {
            tracing::trace!(
                pattern = pattern.name(),
                occurrences = matches.len() - before,
                "pattern matched"
            );
        }
    }

    MatchScan {
        matches,
        active,
        skipped,
    }
}

//! Date and time patterns.

use crate::engine::CharClassMask;
use crate::{PatternCategory, PatternDef};

/// Clock time: `H:MM` up to `HH:MM:SS.fraction`.
pub(crate) fn time() -> PatternDef {
    pattern! {
        name: "time",
        category: PatternCategory::DateTime,
        fragment: r"[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?(?:\.[0-9]{1,9})?",
        weight: 50,
        classes: (CharClassMask::DIGITS | CharClassMask::COLON).bits(),
    }
}

/// Dotted date, day first: `12.3.2020`, `01.01.70`.
pub(crate) fn date() -> PatternDef {
    pattern! {
        name: "date",
        category: PatternCategory::DateTime,
        fragment: r"[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{2,4}",
        weight: 55,
        classes: (CharClassMask::DIGITS | CharClassMask::DOT).bits(),
    }
}

/// Calendar date in ISO 8601 order: `2020-03-12`.
pub(crate) fn iso_date() -> PatternDef {
    pattern! {
        name: "iso8601 date",
        category: PatternCategory::DateTime,
        fragment: r"[0-9]{4}-[0-9]{2}-[0-9]{2}",
        weight: 60,
        classes: (CharClassMask::DIGITS | CharClassMask::DASH).bits(),
    }
}

/// Full ISO 8601 timestamp with optional fraction and optional zone
/// designator. Nearly every character is pinned down, hence the top weight
/// in the library: a timestamp should never be reported as a date plus
/// leftovers when it matches whole.
pub(crate) fn iso_date_time() -> PatternDef {
    pattern! {
        name: "iso8601 date time",
        category: PatternCategory::DateTime,
        fragment: r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,9})?(?:Z|[+-][0-9]{2}:[0-9]{2})?",
        weight: 130,
        classes: (CharClassMask::DIGITS | CharClassMask::DASH | CharClassMask::COLON).bits(),
    }
}

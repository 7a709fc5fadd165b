//! Broad text patterns.
//!
//! These are the low-weight workhorses: they match almost anywhere, so
//! their job is to soak up the stretches between shaped tokens rather than
//! to win regions outright.

use crate::engine::CharClassMask;
use crate::{PatternCategory, PatternDef};

/// Any whitespace run.
pub(crate) fn whitespace() -> PatternDef {
    pattern! {
        name: "whitespace",
        category: PatternCategory::Text,
        fragment: r"\s+",
        weight: 4,
        classes: CharClassMask::WHITESPACE.bits(),
    }
}

/// Run of common punctuation. No activation classes: any one of the
/// characters suffices.
pub(crate) fn punctuation() -> PatternDef {
    pattern! {
        name: "punctuation",
        category: PatternCategory::Text,
        fragment: r"[.,:;!?]+",
        weight: 5,
    }
}

/// Letters, digits and spaces. The broadest pattern in the library and
/// weighted accordingly: below `word`, but high enough that one span over
/// prose beats a chain of words and gaps covering the same region.
pub(crate) fn free_text() -> PatternDef {
    pattern! {
        name: "free text",
        category: PatternCategory::Text,
        fragment: r"[a-zA-Z0-9 ]+",
        weight: 6,
    }
}

/// Letters and digits, no spaces.
pub(crate) fn alphanumeric() -> PatternDef {
    pattern! {
        name: "alphanumeric characters",
        category: PatternCategory::Text,
        fragment: r"[0-9a-zA-Z]+",
        weight: 7,
    }
}

/// ASCII letter run.
pub(crate) fn word() -> PatternDef {
    pattern! {
        name: "word",
        category: PatternCategory::Text,
        fragment: r"[a-zA-Z]+",
        weight: 8,
        classes: CharClassMask::LETTERS.bits(),
    }
}

/// Uppercase-only letter run.
pub(crate) fn uppercase_word() -> PatternDef {
    pattern! {
        name: "uppercase word",
        category: PatternCategory::Text,
        fragment: r"[A-Z]+",
        weight: 9,
        classes: CharClassMask::UPPERCASE.bits(),
    }
}

/// Conventional logging severities, uppercase as loggers emit them.
pub(crate) fn log_level() -> PatternDef {
    pattern! {
        name: "log level",
        category: PatternCategory::Text,
        fragment: r"(?:TRACE|DEBUG|INFO|WARN|ERROR|FATAL)",
        weight: 40,
        classes: CharClassMask::UPPERCASE.bits(),
    }
}

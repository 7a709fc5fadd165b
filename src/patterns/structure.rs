//! Delimited and structured text patterns.

use crate::engine::CharClassMask;
use crate::{PatternCategory, PatternDef};

/// Anything between square brackets, including nothing.
pub(crate) fn string_in_brackets() -> PatternDef {
    pattern! {
        name: "string in brackets",
        category: PatternCategory::Structure,
        fragment: r"\[[^\]]*\]",
        weight: 22,
        classes: CharClassMask::BRACKETS.bits(),
    }
}

/// Anything between parentheses, including nothing.
pub(crate) fn parenthesized_text() -> PatternDef {
    pattern! {
        name: "parenthesized text",
        category: PatternCategory::Structure,
        fragment: r"\([^)]*\)",
        weight: 22,
        classes: CharClassMask::PARENS.bits(),
    }
}

/// Identifier segments joined by dots: package paths, class names,
/// hostnames written as code. At least two segments.
pub(crate) fn dotted_identifier() -> PatternDef {
    pattern! {
        name: "dotted identifier",
        category: PatternCategory::Structure,
        fragment: r"[a-zA-Z_$][a-zA-Z0-9_$]*(?:\.[a-zA-Z_$][a-zA-Z0-9_$]*)+",
        weight: 25,
        classes: CharClassMask::DOT.bits(),
    }
}

/// Single-quoted string, no escape handling.
pub(crate) fn single_quoted() -> PatternDef {
    pattern! {
        name: "single quoted string",
        category: PatternCategory::Structure,
        fragment: r"'[^']*'",
        weight: 28,
        classes: CharClassMask::QUOTES.bits(),
    }
}

/// Double-quoted string, no escape handling.
pub(crate) fn double_quoted() -> PatternDef {
    pattern! {
        name: "double quoted string",
        category: PatternCategory::Structure,
        fragment: r#""[^"]*""#,
        weight: 28,
        classes: CharClassMask::QUOTES.bits(),
    }
}

/// A dotted identifier inside square brackets, the way loggers print their
/// origin. More specific than `string in brackets`, so it outweighs it.
pub(crate) fn bracketed_identifier() -> PatternDef {
    pattern! {
        name: "bracketed identifier",
        category: PatternCategory::Structure,
        fragment: r"\[[a-zA-Z0-9_$]+(?:\.[a-zA-Z0-9_$]+)*\]",
        weight: 35,
        classes: CharClassMask::BRACKETS.bits(),
    }
}

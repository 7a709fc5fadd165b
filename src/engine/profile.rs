//! Input pre-classification.
//!
//! Before any regex runs, the input is scanned once to record which coarse
//! character classes it contains. Patterns declare the classes they cannot
//! match without ([`PatternDef::classes`](crate::PatternDef::classes)), and
//! the matcher skips any pattern whose requirements the input does not meet.
//!
//! Activation is a pure optimization: a false *activation* costs one regex
//! scan that finds nothing, while a false *skip* would lose matches. Pattern
//! authors therefore only list classes that are required by every string the
//! fragment can match, and leave `classes` empty for fragments built on
//! alternatives (for example `[.,:;!?]+`, which needs *some* punctuation but
//! no particular class).

use bitflags::bitflags;

bitflags! {
    /// Coarse character classes observed in an input string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharClassMask: u32 {
        /// ASCII digits `0-9`.
        const DIGITS = 1 << 0;
        /// ASCII letters `a-z` / `A-Z`.
        const LETTERS = 1 << 1;
        /// ASCII uppercase letters (implies `LETTERS`).
        const UPPERCASE = 1 << 2;
        /// Any Unicode whitespace.
        const WHITESPACE = 1 << 3;
        const DOT = 1 << 4;
        const DASH = 1 << 5;
        const COLON = 1 << 6;
        const SLASH = 1 << 7;
        const AT = 1 << 8;
        /// `[` or `]`.
        const BRACKETS = 1 << 9;
        /// `(` or `)`.
        const PARENS = 1 << 10;
        /// `'` or `"`.
        const QUOTES = 1 << 11;
    }
}

/// Character classes present in one concrete input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InputProfile {
    classes: CharClassMask,
}

impl InputProfile {
    /// Single pass over the input.
    pub(crate) fn scan(input: &str) -> Self {
        let mut classes = CharClassMask::empty();
        for ch in input.chars() {
            classes |= match ch {
                '0'..='9' => CharClassMask::DIGITS,
                'a'..='z' => CharClassMask::LETTERS,
                'A'..='Z' => CharClassMask::LETTERS | CharClassMask::UPPERCASE,
                '.' => CharClassMask::DOT,
                '-' => CharClassMask::DASH,
                ':' => CharClassMask::COLON,
                '/' => CharClassMask::SLASH,
                '@' => CharClassMask::AT,
                '[' | ']' => CharClassMask::BRACKETS,
                '(' | ')' => CharClassMask::PARENS,
                '\'' | '"' => CharClassMask::QUOTES,
                _ if ch.is_whitespace() => CharClassMask::WHITESPACE,
                _ => CharClassMask::empty(),
            };
        }
        Self { classes }
    }

    /// True when every class in `required` (raw mask bits) is present.
    /// An empty requirement always activates.
    pub(crate) fn activates(&self, required: u32) -> bool {
        self.classes
            .contains(CharClassMask::from_bits_truncate(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_records_observed_classes() {
        let profile = InputProfile::scan("2020-03-12 WARN x");

        assert!(profile.activates(CharClassMask::DIGITS.bits()));
        assert!(profile.activates((CharClassMask::DIGITS | CharClassMask::DASH).bits()));
        assert!(profile.activates(CharClassMask::UPPERCASE.bits()));
        assert!(profile.activates(CharClassMask::WHITESPACE.bits()));
        assert!(!profile.activates(CharClassMask::COLON.bits()));
        assert!(!profile.activates(CharClassMask::AT.bits()));
    }

    #[test]
    fn uppercase_implies_letters() {
        let profile = InputProfile::scan("WARN");

        assert!(profile.activates(CharClassMask::LETTERS.bits()));
        assert!(profile.activates(CharClassMask::UPPERCASE.bits()));
    }

    #[test]
    fn missing_class_blocks_activation() {
        let profile = InputProfile::scan("hello world");

        assert!(!profile.activates((CharClassMask::LETTERS | CharClassMask::DOT).bits()));
    }

    #[test]
    fn empty_requirement_always_activates() {
        assert!(InputProfile::scan("").activates(0));
        assert!(InputProfile::scan("abc").activates(0));
    }

    #[test]
    fn empty_input_has_no_classes() {
        let profile = InputProfile::scan("");

        assert!(!profile.activates(CharClassMask::DIGITS.bits()));
        assert!(!profile.activates(CharClassMask::WHITESPACE.bits()));
    }
}

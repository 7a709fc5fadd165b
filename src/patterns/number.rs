//! Numeric patterns.

use crate::engine::CharClassMask;
use crate::{PatternCategory, PatternDef};

/// Unbroken run of ASCII digits.
pub(crate) fn number() -> PatternDef {
    pattern! {
        name: "number",
        category: PatternCategory::Number,
        fragment: r"[0-9]+",
        weight: 10,
        classes: CharClassMask::DIGITS.bits(),
    }
}

/// Four-digit year in the 1900s or 2000s. Slightly above `number` so a
/// plausible year is reported as one.
pub(crate) fn year() -> PatternDef {
    pattern! {
        name: "year",
        category: PatternCategory::Number,
        fragment: r"(?:19|20)[0-9]{2}",
        weight: 14,
        classes: CharClassMask::DIGITS.bits(),
    }
}

/// Decimal with a `.` or `,` separator; the integer part may be absent
/// (`.75`), the fraction may not.
pub(crate) fn decimal_number() -> PatternDef {
    pattern! {
        name: "decimal number",
        category: PatternCategory::Number,
        fragment: r"[0-9]*[.,][0-9]+",
        weight: 16,
        classes: CharClassMask::DIGITS.bits(),
    }
}

//! Built-in pattern library.
//!
//! One function per atomic pattern, grouped by category, each returning a
//! plain [`PatternDef`]. The definitions follow three house rules:
//!
//! - **Concatenation-safe fragments**: alternations are always wrapped in a
//!   non-capturing group so fragments can be joined blindly.
//! - **Honest weights**: a weight reflects how much structure a match pins
//!   down. Broad classes sit below 10, shaped tokens (quoted strings,
//!   identifiers) in the 20s and 30s, and formats that fix most of their
//!   characters (timestamps, UUIDs, addresses) from 40 up.
//! - **Sound activation classes**: a pattern only lists character classes
//!   that *every* string it can match must contain. When in doubt, list
//!   nothing and accept the extra scan.

#[path = "patterns/datetime.rs"]
pub(crate) mod datetime;
#[path = "patterns/net.rs"]
pub(crate) mod net;
#[path = "patterns/number.rs"]
pub(crate) mod number;
#[path = "patterns/structure.rs"]
pub(crate) mod structure;
#[path = "patterns/text.rs"]
pub(crate) mod text;


use crate::PatternDef;

/// All built-in pattern definitions in canonical library order.
///
/// The order groups patterns by category; it is stable across releases
/// because it shows through in match listings and the verbose report.
pub fn builtin_patterns() -> Vec<PatternDef> {
    vec![
        number::number(),
        number::year(),
        number::decimal_number(),
        text::whitespace(),
        text::punctuation(),
        text::free_text(),
        text::alphanumeric(),
        text::word(),
        text::uppercase_word(),
        text::log_level(),
        datetime::time(),
        datetime::date(),
        datetime::iso_date(),
        datetime::iso_date_time(),
        structure::string_in_brackets(),
        structure::parenthesized_text(),
        structure::dotted_identifier(),
        structure::single_quoted(),
        structure::double_quoted(),
        structure::bracketed_identifier(),
        net::url(),
        net::ipv4_address(),
        net::email(),
        net::uuid(),
    ]
}

//! Network identifier patterns.

use crate::engine::CharClassMask;
use crate::{PatternCategory, PatternDef};

/// HTTP(S) URL, matching greedily to the next whitespace.
pub(crate) fn url() -> PatternDef {
    pattern! {
        name: "url",
        category: PatternCategory::Network,
        fragment: r"https?://[^\s]+",
        weight: 65,
        classes: (CharClassMask::COLON | CharClassMask::SLASH).bits(),
    }
}

/// Dotted-quad IPv4 address. Octet ranges are not enforced; `999.0.0.1`
/// matches, as the goal is shape recognition rather than validation.
pub(crate) fn ipv4_address() -> PatternDef {
    pattern! {
        name: "ipv4 address",
        category: PatternCategory::Network,
        fragment: r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}",
        weight: 70,
        classes: (CharClassMask::DIGITS | CharClassMask::DOT).bits(),
    }
}

/// Email address, pragmatic rather than RFC-complete.
pub(crate) fn email() -> PatternDef {
    pattern! {
        name: "email address",
        category: PatternCategory::Network,
        fragment: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        weight: 75,
        classes: CharClassMask::AT.bits(),
    }
}

/// Hyphenated UUID. Only the dash is required for activation: a UUID can
/// be all hex letters.
pub(crate) fn uuid() -> PatternDef {
    pattern! {
        name: "uuid",
        category: PatternCategory::Network,
        fragment: r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        weight: 80,
        classes: CharClassMask::DASH.bits(),
    }
}

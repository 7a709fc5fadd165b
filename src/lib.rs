extern crate self as rexgen;

#[macro_use]
mod macros;
mod api;
mod engine;
mod patterns;

pub use api::{
    GeneratedRegex, Recognition, RecognitionDetails, RecognitionVerbose, RecognizerConfig,
    RegexPart, builtin_library, recognize, recognize_verbose_with, recognize_with,
};
pub use engine::{CharClassMask, ConfigurationError, PatternLibrary};
pub use patterns::builtin_patterns;

// --- Core data model ---------------------------------------------------------

/// Categories used to group atomic patterns for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Number,
    Text,
    DateTime,
    Structure,
    Network,
}

/// Declarative definition of one atomic pattern.
///
/// A `PatternDef` is plain data: it carries no compiled state. Compilation
/// and validation happen when a [`PatternLibrary`] is built from a list of
/// definitions. Definitions are usually written with the [`pattern!`] macro:
///
/// ```
/// use rexgen::{CharClassMask, PatternCategory};
///
/// let def = rexgen::pattern! {
///     name: "number",
///     category: PatternCategory::Number,
///     fragment: r"[0-9]+",
///     weight: 10,
///     classes: CharClassMask::DIGITS.bits(),
/// };
/// assert_eq!(def.name, "number");
/// ```
#[derive(Debug, Clone)]
pub struct PatternDef {
    /// Identity. Must be unique within a library.
    pub name: String,
    /// Regex fragment recognizing the pattern. Fragments must be safe to
    /// concatenate, so alternations have to be wrapped (`(?:a|b)`, never
    /// `a|b` at the top level).
    pub fragment: String,
    /// Specificity weight (higher = semantically more specific). Must be
    /// positive; the scorer relies on that to keep literal-only covers
    /// strictly below every cover containing a genuine match.
    pub weight: i32,
    /// Display/grouping tag.
    pub category: PatternCategory,
    /// Character classes the input must contain for this pattern to be
    /// scanned at all ([`CharClassMask`] bits). All listed classes are
    /// required, so only classes the pattern *cannot* match without may be
    /// named here. `0` means "always scan".
    pub classes: u32,
}

/// Half-open byte range `[start, end)` into the input.
///
/// Offsets always fall on `char` boundaries: they come from regex matches
/// or from whole-`char` literal steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// One occurrence of an atomic pattern in the input: the pattern's index in
/// its library plus the matched range. The matched text is sliced from the
/// input on demand rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PatternMatch {
    pub pattern: usize,
    pub span: Span,
}

/// What a lattice edge stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeKind {
    /// A real match of the library pattern with this index.
    Pattern(usize),
    /// Synthetic single-character fallback, inserted wherever no
    /// multi-character match starts so the lattice stays connected.
    Literal,
}

/// An edge of the offset lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LatticeEdge {
    pub span: Span,
    pub kind: EdgeKind,
}

/// A full cover of the input: contiguous, non-overlapping edges spanning
/// exactly `[0, N)`, plus the cover's score (additive over edges, so the
/// enumerator can carry it as a running total).
#[derive(Debug, Clone)]
pub(crate) struct CandidateCover {
    pub edges: Vec<LatticeEdge>,
    pub score: i64,
}

impl CandidateCover {
    /// True when the edge sequence is contiguous and spans `[0, len)`.
    pub fn spans(&self, len: usize) -> bool {
        let mut at = 0;
        for edge in &self.edges {
            if edge.span.start != at || edge.span.end <= edge.span.start {
                return false;
            }
            at = edge.span.end;
        }
        at == len
    }
}

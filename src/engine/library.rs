//! Pattern library validation and compilation.
//!
//! A [`PatternLibrary`] is built once from a list of [`PatternDef`]s and then
//! shared by every recognition run. Construction performs all validation up
//! front so the rest of the engine can assume a well-formed library:
//!
//! 1. **Identity**: pattern names must be unique within the library.
//! 2. **Weight**: specificity weights must be positive. The scorer depends on
//!    this to keep the all-literal fallback strictly below any cover that
//!    contains a real match.
//! 3. **Fragment**: every fragment must compile as a regular expression.
//!
//! Any violation aborts construction with a [`ConfigurationError`] naming the
//! offending pattern; a half-built library is never observable.

use crate::PatternDef;
use regex::Regex;
use thiserror::Error;
use std::collections::HashSet;

/// Index of a pattern inside its library. Lattice edges and matches refer to
/// patterns by id to stay `Copy`.
pub(crate) type PatternId = usize;

/// Rejected pattern configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("duplicate pattern name {name:?}")]
    DuplicateName { name: String },
    #[error("pattern {name:?} has an invalid fragment")]
    InvalidFragment {
        name: String,
        #[source]
        source: Box<regex::Error>,
    },
    #[error("pattern {name:?} has non-positive weight {weight}")]
    InvalidWeight { name: String, weight: i32 },
}

/// One validated pattern: its definition plus the compiled fragment.
#[derive(Debug)]
pub struct AtomicPattern {
    def: PatternDef,
    pub(crate) regex: Regex,
}

impl AtomicPattern {
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn fragment(&self) -> &str {
        &self.def.fragment
    }

    pub fn weight(&self) -> i32 {
        self.def.weight
    }

    pub(crate) fn classes(&self) -> u32 {
        self.def.classes
    }
}

/// An immutable, validated set of atomic patterns.
#[derive(Debug)]
pub struct PatternLibrary {
    patterns: Vec<AtomicPattern>,
}

impl PatternLibrary {
    /// Validates and compiles `defs` in order. Library order is part of the
    /// engine's deterministic tie-breaking, so callers should treat it as
    /// meaningful.
    pub fn new(defs: Vec<PatternDef>) -> Result<Self, ConfigurationError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(defs.len());
        let mut patterns = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(ConfigurationError::DuplicateName { name: def.name });
            }
            if def.weight <= 0 {
                return Err(ConfigurationError::InvalidWeight {
                    name: def.name,
                    weight: def.weight,
                });
            }
            let regex = match Regex::new(&def.fragment) {
                Ok(regex) => regex,
                Err(source) => {
                    return Err(ConfigurationError::InvalidFragment {
                        name: def.name,
                        source: Box::new(source),
                    });
                }
            };
            patterns.push(AtomicPattern { def, regex });
        }

        tracing::debug!(patterns = patterns.len(), "pattern library compiled");
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub(crate) fn get(&self, id: PatternId) -> &AtomicPattern {
        &self.patterns[id]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &AtomicPattern> {
        self.patterns.iter()
    }
}

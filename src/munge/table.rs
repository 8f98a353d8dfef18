//! Bidirectional substitution table
//!
//! A table is built from an ordered list of `(character, glyph)` pairs and
//! indexed twice: by source for munging and by glyph for unmunging. Candidate
//! order always follows the order of the pair list.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

/// Longest glyph (in characters) the generator's lookahead window can match
pub const MAX_GLYPH_CHARS: usize = 2;

/// Errors raised while building a substitution table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("substitution #{index} has an empty source")]
    EmptyKey { index: usize },

    #[error("substitution #{index} ('{from}') has an empty glyph")]
    EmptyGlyph { index: usize, from: String },

    #[error("substitution #{index} ('{from}' -> '{to}') is longer than two characters")]
    GlyphTooLong {
        index: usize,
        from: String,
        to: String,
    },
}

/// One `from -> to` substitution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubstitutionPair {
    pub from: String,
    pub to: String,
}

impl SubstitutionPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("a", "@"),
    ("b", "8"),
    ("c", "("),
    ("d", "6"),
    ("e", "3"),
    ("f", "#"),
    ("g", "9"),
    ("h", "#"),
    ("i", "1"),
    ("i", "!"),
    ("k", "<"),
    ("l", "1"),
    ("l", "i"),
    ("o", "0"),
    ("q", "9"),
    ("s", "$"),
    ("s", "5"),
    ("t", "+"),
    ("v", ">"),
    ("v", "<"),
    ("w", "uu"),
    ("w", "2u"),
    ("x", "%"),
    ("y", "?"),
];

static BUILTIN: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::index(
        BUILTIN_PAIRS
            .iter()
            .map(|(from, to)| SubstitutionPair::new(*from, *to))
            .collect(),
    )
});

/// Substitution pairs indexed in both directions
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    pairs: Vec<SubstitutionPair>,
    munge: HashMap<String, Vec<String>>,
    unmunge: HashMap<String, Vec<String>>,
}

impl SubstitutionTable {
    /// The built-in leetspeak table, shared for the lifetime of the process
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN
    }

    /// Build a table from an ordered pair list
    ///
    /// Both sides of every pair must be one or two characters long, otherwise
    /// the pair could never be matched by the 1-2 character lookahead.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = SubstitutionPair>,
    ) -> Result<Self, TableError> {
        let pairs: Vec<SubstitutionPair> = pairs.into_iter().collect();

        for (index, pair) in pairs.iter().enumerate() {
            if pair.from.is_empty() {
                return Err(TableError::EmptyKey { index });
            }
            if pair.to.is_empty() {
                return Err(TableError::EmptyGlyph {
                    index,
                    from: pair.from.clone(),
                });
            }
            if pair.from.chars().count() > MAX_GLYPH_CHARS
                || pair.to.chars().count() > MAX_GLYPH_CHARS
            {
                return Err(TableError::GlyphTooLong {
                    index,
                    from: pair.from.clone(),
                    to: pair.to.clone(),
                });
            }
        }

        Ok(Self::index(pairs))
    }

    fn index(pairs: Vec<SubstitutionPair>) -> Self {
        let mut munge: HashMap<String, Vec<String>> = HashMap::new();
        let mut unmunge: HashMap<String, Vec<String>> = HashMap::new();

        for pair in &pairs {
            munge
                .entry(pair.from.clone())
                .or_default()
                .push(pair.to.clone());
            unmunge
                .entry(pair.to.clone())
                .or_default()
                .push(pair.from.clone());
        }

        Self {
            pairs,
            munge,
            unmunge,
        }
    }

    /// Glyphs registered for a source fragment, in pair order
    pub fn munge_candidates(&self, fragment: &str) -> Option<&[String]> {
        self.munge.get(fragment).map(Vec::as_slice)
    }

    /// Source fragments registered for a glyph, in pair order
    pub fn unmunge_candidates(&self, glyph: &str) -> Option<&[String]> {
        self.unmunge.get(glyph).map(Vec::as_slice)
    }

    /// The pair list this table was built from
    pub fn pairs(&self) -> &[SubstitutionPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

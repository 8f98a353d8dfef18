//! Backtracking munge/unmunge generator
//!
//! Walks the input left to right, trying a one-character fragment and then a
//! two-character fragment at every position. Each fragment's substitution is
//! memoised for the rest of the path so that repeated fragments resolve the
//! same way within a single variant.

use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use thiserror::Error;
use tracing::{debug, trace};

use super::table::SubstitutionTable;

/// Errors raised by bounded generation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MungeError {
    /// Input is longer than the configured character limit
    #[error("input has {len} characters, limit is {max}")]
    InputTooLong { len: usize, max: usize },

    /// Enumeration produced more distinct variants than allowed
    #[error("more than {max} variants generated")]
    TooManyVariants { max: usize },
}

/// Which way substitutions are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Characters to look-alike glyphs
    Munge,
    /// Glyphs back to plausible characters
    Unmunge,
}

/// Limits for a single generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum input length in characters
    pub max_input_chars: Option<usize>,

    /// Maximum number of distinct variants before giving up
    pub max_variants: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_input_chars: Some(16),
            max_variants: Some(1_000_000),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without any limits
    pub fn unbounded() -> Self {
        Self {
            max_input_chars: None,
            max_variants: None,
        }
    }

    /// Set the maximum input length
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    /// Set the maximum number of variants
    pub fn with_max_variants(mut self, max: usize) -> Self {
        self.max_variants = Some(max);
        self
    }
}

/// Enumerates substitution variants against a table
#[derive(Debug, Clone)]
pub struct Generator<'t> {
    table: &'t SubstitutionTable,
    config: GeneratorConfig,
}

impl<'t> Generator<'t> {
    /// Create a generator with default limits
    pub fn new(table: &'t SubstitutionTable) -> Self {
        Self::with_config(table, GeneratorConfig::default())
    }

    /// Create a generator with explicit limits
    pub fn with_config(table: &'t SubstitutionTable, config: GeneratorConfig) -> Self {
        Self { table, config }
    }

    /// Limits applied to each call
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Characters to glyphs, see [`Generator::generate`]
    pub fn munge(&self, password: &str) -> Result<Vec<String>, MungeError> {
        self.generate(password, Direction::Munge)
    }

    /// Glyphs back to characters, see [`Generator::generate`]
    pub fn unmunge(&self, password: &str) -> Result<Vec<String>, MungeError> {
        self.generate(password, Direction::Unmunge)
    }

    /// Enumerate every variant of `input`, excluding `input` itself
    ///
    /// Variants come out depth-first: shorter fragments before longer ones,
    /// candidates in table order. A variant reachable through several
    /// fragment splits is reported once, at its first position.
    pub fn generate(&self, input: &str, direction: Direction) -> Result<Vec<String>, MungeError> {
        let chars: Vec<char> = input.chars().collect();

        if let Some(max) = self.config.max_input_chars {
            if chars.len() > max {
                return Err(MungeError::InputTooLong {
                    len: chars.len(),
                    max,
                });
            }
        }

        let mut walk = Walk {
            table: self.table,
            direction,
            input: &chars,
            buffer: String::with_capacity(input.len() * 2),
            memo: HashMap::new(),
            seen: HashSet::new(),
            variants: Vec::new(),
            // the input itself is dropped later, so allow one extra
            limit: self.config.max_variants.map(|max| max.saturating_add(1)),
        };

        if walk.step(0).is_break() {
            let max = self.config.max_variants.unwrap_or_default();
            debug!(?direction, input, max, "variant limit reached");
            return Err(MungeError::TooManyVariants { max });
        }

        let mut variants = walk.variants;
        variants.retain(|v| v != input);
        if let Some(max) = self.config.max_variants {
            if variants.len() > max {
                return Err(MungeError::TooManyVariants { max });
            }
        }

        debug!(?direction, input, count = variants.len(), "generated variants");
        Ok(variants)
    }
}

/// Scratch state for one generation call
struct Walk<'a> {
    table: &'a SubstitutionTable,
    direction: Direction,
    input: &'a [char],
    buffer: String,
    memo: HashMap<String, String>,
    seen: HashSet<String>,
    variants: Vec<String>,
    limit: Option<usize>,
}

impl Walk<'_> {
    fn step(&mut self, index: usize) -> ControlFlow<()> {
        if index == self.input.len() {
            return self.emit();
        }

        for length in 1..=2 {
            if index + length > self.input.len() {
                break;
            }
            let fragment: String = self.input[index..index + length].iter().collect();

            for candidate in self.candidates(&fragment) {
                let mark = self.buffer.len();
                self.buffer.push_str(&candidate);
                // a memoised fragment keeps the binding of the frame that made it
                let fresh = self.memo.insert(fragment.clone(), candidate).is_none();

                let flow = self.step(index + length);

                self.buffer.truncate(mark);
                if fresh {
                    self.memo.remove(&fragment);
                }
                flow?;
            }
        }

        ControlFlow::Continue(())
    }

    fn emit(&mut self) -> ControlFlow<()> {
        if self.seen.insert(self.buffer.clone()) {
            trace!(variant = %self.buffer, "variant");
            self.variants.push(self.buffer.clone());
        }
        match self.limit {
            Some(limit) if self.variants.len() > limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    fn candidates(&self, fragment: &str) -> Vec<String> {
        if let Some(chosen) = self.memo.get(fragment) {
            return vec![chosen.clone()];
        }

        let single = fragment.chars().nth(1).is_none();
        match (self.direction, single) {
            (Direction::Munge, true) => {
                let mut out = vec![fragment.to_string()];
                if let Some(glyphs) = self.table.munge_candidates(fragment) {
                    out.extend(glyphs.iter().cloned());
                }
                out
            }
            (Direction::Unmunge, true) => match self.table.unmunge_candidates(fragment) {
                Some(sources) => sources.to_vec(),
                None => vec![fragment.to_string()],
            },
            (Direction::Munge, false) => self
                .table
                .munge_candidates(fragment)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            (Direction::Unmunge, false) => self
                .table
                .unmunge_candidates(fragment)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }
}

/// Munge with the built-in table and no limits
pub fn munge(password: &str) -> Vec<String> {
    generate_unbounded(password, Direction::Munge)
}

/// Unmunge with the built-in table and no limits
pub fn unmunge(password: &str) -> Vec<String> {
    generate_unbounded(password, Direction::Unmunge)
}

fn generate_unbounded(input: &str, direction: Direction) -> Vec<String> {
    let generator = Generator::with_config(SubstitutionTable::builtin(), GeneratorConfig::unbounded());
    // without limits generation cannot fail
    generator.generate(input, direction).unwrap_or_default()
}

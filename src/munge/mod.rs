//! Password munging
//!
//! Expands a password into every look-alike variant reachable through a
//! substitution table ("munging"), or reconstructs plausible originals from a
//! munged password ("unmunging").
//!
//! # Example
//!
//! ```rust
//! use mungefmt::munge::{munge, unmunge};
//!
//! assert_eq!(munge("lo"), vec!["l0", "1o", "10", "io", "i0"]);
//! assert_eq!(unmunge("uu"), vec!["w"]);
//! ```

mod generator;
mod table;

pub use generator::{munge, unmunge, Direction, Generator, GeneratorConfig, MungeError};
pub use table::{SubstitutionPair, SubstitutionTable, TableError, MAX_GLYPH_CHARS};

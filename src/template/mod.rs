//! Format templates with optional indices and named placeholders
//!
//! Resolution rewrites a human-friendly template into one that only uses
//! explicit positional indices; the positional formatter then substitutes
//! arguments. The two steps are independent: resolution never looks at the
//! arguments.
//!
//! # Example
//!
//! ```rust
//! use mungefmt::template::{format_positional, resolve};
//!
//! let resolved = resolve("{name} is {}, {name}");
//! assert_eq!(resolved, "{0} is {1}, {0}");
//!
//! let text = format_positional(&resolved, &[&"Ada", &36]).unwrap();
//! assert_eq!(text, "Ada is 36, Ada");
//! ```

mod formatter;
pub mod lexer;
mod resolver;

pub use formatter::{format_positional, parse_placeholder, Placeholder, MAX_ALIGNMENT};
pub use resolver::{resolve, resolve_template, ResolvedTemplate};

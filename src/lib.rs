//! mungefmt - template resolution and password munging
//!
//! This library provides two independent engines:
//!
//! - [`template`]: rewrites format templates that mix implicit (`{}`),
//!   explicit (`{0}`) and named (`{name}`) placeholders into purely positional
//!   ones, plus a small positional formatter.
//! - [`munge`]: enumerates leetspeak-style substitution variants of a password
//!   and reverses them.
//!
//! # Example
//!
//! ```rust
//! use mungefmt::{format, munge::munge};
//!
//! let text = format("{} is a {kind}, really a {kind}", &[&"this", &"test"]).unwrap();
//! assert_eq!(text, "this is a test, really a test");
//!
//! assert!(munge("lo").contains(&"10".to_string()));
//! ```

pub mod combinatorics;
pub mod config;
pub mod error;
pub mod munge;
pub mod template;

use std::fmt::Display;

use tracing::debug;

pub use config::{Config, ConfigError};
pub use error::FormatError;
pub use munge::{Direction, Generator, GeneratorConfig, MungeError, SubstitutionTable};
pub use template::{resolve, resolve_template, ResolvedTemplate};

/// Resolve a template and substitute positional arguments
///
/// Implicit placeholders take the next argument, named placeholders are
/// bound to arguments in first-seen order, and explicit indices are used as
/// written (while still consuming a slot).
///
/// The resolver keeps `:spec` suffixes, but the formatter only accepts an
/// empty one: `{total,-8:C}` resolves fine and then fails here with
/// [`FormatError::UnsupportedFormatSpec`]. Widths are limited to
/// [`template::MAX_ALIGNMENT`].
///
/// # Example
///
/// ```rust
/// use mungefmt::format;
///
/// assert_eq!(format("{a}+{a}={}", &[&1, &2]).unwrap(), "1+1=2");
/// ```
pub fn format(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let resolved = resolve_template(template);
    debug!(
        template,
        resolved = %resolved.text,
        slots = resolved.slots,
        args = args.len(),
        "resolved template"
    );
    template::format_positional(&resolved.text, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_implicit_and_explicit() {
        let out = format("{} is a {1}", &[&"this", &"test"]).expect("Should format");
        assert_eq!(out, "this is a test");
    }

    #[test]
    fn test_format_named_reuse() {
        let out = format("{x} and {x} and {y}", &[&"a", &"b"]).expect("Should format");
        assert_eq!(out, "a and a and b");
    }

    #[test]
    fn test_format_escapes() {
        let out = format("{{literal}} {}", &[&1]).expect("Should format");
        assert_eq!(out, "{literal} 1");
    }

    #[test]
    fn test_format_alignment_with_name() {
        let out = format("[{id,4}]", &[&7]).expect("Should format");
        assert_eq!(out, "[   7]");
    }

    #[test]
    fn test_format_missing_argument() {
        let result = format("{} {}", &[&1]);
        assert!(matches!(
            result,
            Err(FormatError::IndexOutOfRange { index: 1, count: 1, .. })
        ));
    }

    #[test]
    fn test_format_spec_kept_by_resolver_is_rejected() {
        assert_eq!(resolve("{total,-8:C}"), "{0,-8:C}");
        let result = format("{total,-8:C}", &[&12]);
        assert!(matches!(
            result,
            Err(FormatError::UnsupportedFormatSpec { ref spec, .. }) if spec == "C"
        ));
    }

    #[test]
    fn test_format_stray_brace_reaches_formatter() {
        let result = format("{} } {}", &[&1, &2]);
        assert!(matches!(result, Err(FormatError::UnbalancedBrace { .. })));
    }
}

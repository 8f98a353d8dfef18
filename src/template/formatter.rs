//! Positional formatter for resolved templates
//!
//! Accepts `{index}`, `{index,alignment}` and `{index:spec}` placeholders plus
//! `{{`/`}}` escapes. Alignment follows the usual width convention: positive
//! pads on the left (right-aligned), negative pads on the right, and widths
//! must stay below [`MAX_ALIGNMENT`]. Format specifiers such as `:N2` or `:C`
//! are culture-dependent, so any non-empty one is rejected with
//! [`FormatError::UnsupportedFormatSpec`] even though the resolver keeps it.

use std::fmt::{Display, Write};

use crate::error::{FormatError, Span};

use super::lexer::{lex, Token};

/// Widths at or above this magnitude are rejected
pub const MAX_ALIGNMENT: i64 = 1_000_000;

/// A parsed `{index[,alignment][:spec]}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    pub index: usize,
    pub alignment: Option<i64>,
    pub spec: Option<&'t str>,
}

/// Substitute positional arguments into a template
///
/// The template must only use explicit indices; run it through
/// [`super::resolve`] first (or use [`crate::format`]) to accept implicit
/// and named placeholders.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());

    for lexed in lex(template) {
        let (token, span) = lexed.map_err(|span| FormatError::UnbalancedBrace { span })?;
        let slice = &template[span.clone()];

        match token {
            Token::Text => out.push_str(slice),
            Token::EscapedOpen => out.push('{'),
            Token::EscapedClose => out.push('}'),
            Token::Placeholder => {
                let placeholder = parse_placeholder(&slice[1..slice.len() - 1], span.clone())?;

                if let Some(spec) = placeholder.spec {
                    return Err(FormatError::UnsupportedFormatSpec {
                        spec: spec.to_string(),
                        span,
                    });
                }

                let arg = args
                    .get(placeholder.index)
                    .ok_or(FormatError::IndexOutOfRange {
                        index: placeholder.index,
                        count: args.len(),
                        span: span.clone(),
                    })?;

                write_aligned(&mut out, *arg, placeholder.alignment);
            }
        }
    }

    Ok(out)
}

/// Parse the inside of a placeholder (without the braces)
pub fn parse_placeholder(body: &str, span: Span) -> Result<Placeholder<'_>, FormatError> {
    let (head, spec) = match body.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (body, None),
    };
    let (index_text, alignment_text) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index_text = index_text.trim();
    let index = index_text
        .parse::<usize>()
        .ok()
        .filter(|_| index_text.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| FormatError::InvalidIndex {
            text: index_text.to_string(),
            span: span.clone(),
        })?;

    let alignment = match alignment_text {
        Some(text) => {
            let text = text.trim();
            let width = text
                .parse::<i64>()
                .ok()
                .filter(|w| w.unsigned_abs() < MAX_ALIGNMENT.unsigned_abs())
                .ok_or_else(|| FormatError::InvalidAlignment {
                    text: text.to_string(),
                    span: span.clone(),
                })?;
            Some(width)
        }
        None => None,
    };

    Ok(Placeholder {
        index,
        alignment,
        spec: spec.filter(|s| !s.is_empty()),
    })
}

fn write_aligned(out: &mut String, arg: &dyn Display, alignment: Option<i64>) {
    // bounded by MAX_ALIGNMENT when parsed
    let width = alignment.map_or(0, |a| a.unsigned_abs() as usize);
    // writing into a String cannot fail
    let _ = match alignment {
        Some(a) if a < 0 => write!(out, "{:<width$}", arg, width = width),
        Some(_) => write!(out, "{:>width$}", arg, width = width),
        None => write!(out, "{}", arg),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_substitution() {
        let out = format_positional("{0} is a {1}", &[&"this", &"test"]).expect("Should format");
        assert_eq!(out, "this is a test");
    }

    #[test]
    fn test_reused_and_reordered_indices() {
        let out = format_positional("{1}{0}{1}", &[&"a", &"b"]).expect("Should format");
        assert_eq!(out, "bab");
    }

    #[test]
    fn test_escapes() {
        let out = format_positional("{{{0}}}", &[&42]).expect("Should format");
        assert_eq!(out, "{42}");
    }

    #[test]
    fn test_alignment() {
        let out = format_positional("[{0,5}][{1,-4}]", &[&"ab", &7]).expect("Should format");
        assert_eq!(out, "[   ab][7   ]");
    }

    #[test]
    fn test_empty_spec_is_accepted() {
        let out = format_positional("{0:}", &[&1.5]).expect("Should format");
        assert_eq!(out, "1.5");
    }

    #[test]
    fn test_index_out_of_range() {
        let err = format_positional("a {2}", &[&1]).unwrap_err();
        assert_eq!(
            err,
            FormatError::IndexOutOfRange {
                index: 2,
                count: 1,
                span: 2..5
            }
        );
    }

    #[test]
    fn test_unsupported_spec() {
        let err = format_positional("{0:N2}", &[&1]).unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedFormatSpec { ref spec, .. } if spec == "N2"));
    }

    #[test]
    fn test_stray_close_brace() {
        let err = format_positional("oops }", &[]).unwrap_err();
        assert_eq!(err, FormatError::UnbalancedBrace { span: 5..6 });
    }

    #[test]
    fn test_named_placeholder_is_invalid_here() {
        let err = format_positional("{name}", &[&1]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidIndex { ref text, .. } if text == "name"));
    }

    #[test]
    fn test_invalid_alignment() {
        let err = format_positional("{0,wide}", &[&1]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidAlignment { .. }));
    }

    #[test]
    fn test_alignment_is_bounded() {
        for template in ["{0,9999999999}", "{0,-1000000}", "{0,1000000}"] {
            let err = format_positional(template, &[&1]).unwrap_err();
            assert!(
                matches!(err, FormatError::InvalidAlignment { .. }),
                "{:?} accepted",
                template
            );
        }
        let out = format_positional("{0,999999}", &[&1]).expect("Should format");
        assert_eq!(out.len(), 999_999);
    }

    #[test]
    fn test_alignment_at_i64_min() {
        let err = format_positional("{0,-9223372036854775808}", &[&1]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidAlignment { .. }));
    }

    #[test]
    fn test_parse_placeholder_parts() {
        let p = parse_placeholder(" 3 , -10 :x", 0..1).expect("Should parse");
        assert_eq!(
            p,
            Placeholder {
                index: 3,
                alignment: Some(-10),
                spec: Some("x")
            }
        );
    }
}

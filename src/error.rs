//! Error types for positional formatting

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A `{` or `}` that is neither escaped nor part of a placeholder
    #[error("unbalanced brace at {span:?}")]
    UnbalancedBrace { span: Span },

    /// Placeholder index is not a non-negative integer
    #[error("invalid placeholder index '{text}' at {span:?}")]
    InvalidIndex { text: String, span: Span },

    /// Placeholder refers past the end of the argument list
    #[error("placeholder index {index} at {span:?} is out of range ({count} arguments)")]
    IndexOutOfRange {
        index: usize,
        count: usize,
        span: Span,
    },

    /// Alignment component is not a signed integer
    #[error("invalid alignment '{text}' at {span:?}")]
    InvalidAlignment { text: String, span: Span },

    /// Format specifiers (`{0:N2}`) are not interpreted
    #[error("unsupported format specifier '{spec}' at {span:?}")]
    UnsupportedFormatSpec { spec: String, span: Span },
}

impl FormatError {
    /// Span of the offending template text
    pub fn span(&self) -> &Span {
        match self {
            FormatError::UnbalancedBrace { span }
            | FormatError::InvalidIndex { span, .. }
            | FormatError::IndexOutOfRange { span, .. }
            | FormatError::InvalidAlignment { span, .. }
            | FormatError::UnsupportedFormatSpec { span, .. } => span,
        }
    }

    fn label(&self) -> String {
        match self {
            FormatError::UnbalancedBrace { .. } => {
                "unmatched brace; write `{{` or `}}` for a literal brace".to_string()
            }
            FormatError::InvalidIndex { text, .. } => {
                format!("'{}' is not an argument index", text)
            }
            FormatError::IndexOutOfRange { index, count, .. } => {
                format!("argument {} requested, {} supplied", index, count)
            }
            FormatError::InvalidAlignment { text, .. } => {
                format!("'{}' is not a width", text)
            }
            FormatError::UnsupportedFormatSpec { spec, .. } => {
                format!("format specifier '{}' is not supported", spec)
            }
        }
    }

    /// Format the error with template context using ariadne
    pub fn report(&self, template: &str, name: &str) -> String {
        self.render(template, name, true)
    }

    /// Same as [`FormatError::report`] without terminal colors
    pub fn report_plain(&self, template: &str, name: &str) -> String {
        self.render(template, name, false)
    }

    fn render(&self, template: &str, name: &str, color: bool) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Error, name, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_label(
                Label::new((name, span))
                    .with_message(self.label())
                    .with_color(Color::Red),
            )
            .finish()
            .write((name, Source::from(template)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

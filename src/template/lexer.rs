//! Lexer for positional format templates using logos

use logos::Logos;

pub use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{{`, a literal open brace
    #[token("{{")]
    EscapedOpen,

    /// `}}`, a literal close brace
    #[token("}}")]
    EscapedClose,

    /// `{...}` with no braces inside
    #[regex(r"\{[^{}]*\}")]
    Placeholder,

    /// Run of literal text
    #[regex(r"[^{}]+")]
    Text,
}

/// A lexed template piece, or the span of a brace that pairs with nothing
pub type Lexed = Result<(Token, Span), Span>;

/// Lex a template into tokens with spans
///
/// Unlike a DSL lexer, errors are kept: a lone `{` or `}` is reported as
/// `Err(span)` so the formatter can point at it.
pub fn lex(input: &str) -> impl Iterator<Item = Lexed> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
}

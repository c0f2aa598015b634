//! Parse error types.

use std::fmt;

use sipl_ir::{Span, Token, TokenKind};

/// What the parser was unable to do.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// A specific token was required.
    UnexpectedToken { expected: TokenKind },
    /// No expression can start at the current token.
    ExpectedExpression,
    /// A statement must be an assignment, `if`, or `while`.
    InvalidStatement,
    /// A function or parameter name was required.
    ExpectedIdentifier,
    /// Tokens remain after the main block's closing `end`.
    TrailingInput,
}

/// Where the error was found: the offending token's text, or end of input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorSite {
    Token(String),
    End,
}

impl fmt::Display for ErrorSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSite::Token(text) => write!(f, "at '{text}'"),
            ErrorSite::End => write!(f, "at end"),
        }
    }
}

/// A recorded syntax error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    /// 1-based line of the offending token.
    pub line: u32,
    pub site: ErrorSite,
}

impl ParseError {
    /// Build an error pointing at `token`, whose source text is `text`.
    pub fn at_token(
        kind: ParseErrorKind,
        message: impl Into<String>,
        token: &Token,
        text: &str,
    ) -> Self {
        let site = if token.kind == TokenKind::Eof {
            ErrorSite::End
        } else {
            ErrorSite::Token(text.to_string())
        };
        ParseError {
            kind,
            message: message.into(),
            span: token.span,
            line: token.line,
            site,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.site, self.message)
    }
}

impl std::error::Error for ParseError {}

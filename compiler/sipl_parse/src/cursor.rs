//! Token cursor for navigating the token stream.
//!
//! Provides token access, one token of lookahead, and consumption methods.

use sipl_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

use crate::{ParseError, ParseErrorKind};

/// Cursor for navigating tokens.
///
/// Invariant: the stream ends with `Eof` and the cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.iter().last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one (`Eof` past the end).
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(pos = self.pos, kind = %token.kind, line = token.line, "advance");
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind, or fail with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(ParseErrorKind::UnexpectedToken { expected: kind }, message))
        }
    }

    /// Consume an identifier, or fail with `message`.
    pub fn expect_ident(&mut self, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance())
        } else {
            Err(self.error_here(ParseErrorKind::ExpectedIdentifier, message))
        }
    }

    /// Build an error pointing at the current token.
    #[cold]
    pub fn error_here(&self, kind: ParseErrorKind, message: &str) -> ParseError {
        let token = self.current();
        ParseError::at_token(kind, message, token, self.interner.lookup(token.lexeme))
    }
}

//! Lexer for SIPL.
//!
//! A single left-to-right pass with at most one character of lookahead.
//! Every lexeme is interned; number tokens carry an arbitrary-precision
//! integer literal and `true`/`false` carry a boolean literal.
//!
//! Lexical errors never stop the scan: they are collected in
//! [`LexOutput::errors`] and scanning resumes at the next character.

mod cursor;
mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use num_bigint::BigInt;
use sipl_ir::{Literal, Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

use cursor::Cursor;

/// Result of lexing one source text.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// Token stream, always terminated by `Eof`.
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source text into tokens, interning every lexeme.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut lexer = Lexer {
        cursor: Cursor::new(source),
        interner,
        output: LexOutput {
            tokens: TokenList::with_capacity(source.len() / 3 + 1),
            errors: Vec::new(),
        },
    };
    lexer.run();

    debug!(
        tokens = lexer.output.tokens.len(),
        errors = lexer.output.errors.len(),
        "lexed source"
    );
    lexer.output
}

#[inline]
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

struct Lexer<'src, 'i> {
    cursor: Cursor<'src>,
    interner: &'i StringInterner,
    output: LexOutput,
}

impl Lexer<'_, '_> {
    fn run(&mut self) {
        while !self.cursor.is_eof() {
            self.scan_token();
        }
        let end = self.cursor.pos();
        let eof = Token::new(
            TokenKind::Eof,
            Name::EMPTY,
            self.cursor.line(),
            Span::from_range(end..end),
        );
        self.output.tokens.push(eof);
    }

    fn scan_token(&mut self) {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let Some(c) = self.cursor.bump() else {
            return;
        };

        match c {
            '(' => self.push(TokenKind::LParen, start, line),
            ')' => self.push(TokenKind::RParen, start, line),
            ',' => self.push(TokenKind::Comma, start, line),
            ';' => self.push(TokenKind::Semicolon, start, line),
            '/' => self.push(TokenKind::Slash, start, line),
            '*' => self.push(TokenKind::Star, start, line),
            '+' => self.push(TokenKind::Plus, start, line),
            '-' => self.push(TokenKind::Minus, start, line),
            '=' => self.push(TokenKind::Eq, start, line),
            ':' => {
                if self.cursor.eat('=') {
                    self.push(TokenKind::Assign, start, line);
                } else {
                    self.error(LexErrorKind::LoneColon, start, line);
                }
            }
            '!' => {
                if self.cursor.eat('=') {
                    self.push(TokenKind::NotEq, start, line);
                } else {
                    self.error(LexErrorKind::LoneBang, start, line);
                }
            }
            '<' => {
                let kind = if self.cursor.eat('=') {
                    TokenKind::LtEq
                } else if self.cursor.eat('>') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Lt
                };
                self.push(kind, start, line);
            }
            '>' => {
                let kind = if self.cursor.eat('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                };
                self.push(kind, start, line);
            }
            ' ' | '\t' | '\r' | '\n' => {}
            c if c.is_ascii_digit() => self.number(start, line),
            c if is_letter(c) => self.identifier(start, line),
            c => self.error(LexErrorKind::UnexpectedCharacter(c), start, line),
        }
    }

    fn number(&mut self, start: usize, line: u32) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let text = self.cursor.slice_from(start);
        // A non-empty run of ASCII digits always parses.
        let value: BigInt = text.parse().unwrap_or_default();
        let token = self.token(TokenKind::Number, start, line);
        self.output.tokens.push(token.with_literal(Literal::Int(value)));
    }

    fn identifier(&mut self, start: usize, line: u32) {
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Ident);
        let token = self.token(kind, start, line);
        let token = match kind {
            TokenKind::True => token.with_literal(Literal::Bool(true)),
            TokenKind::False => token.with_literal(Literal::Bool(false)),
            _ => token,
        };
        self.output.tokens.push(token);
    }

    fn token(&self, kind: TokenKind, start: usize, line: u32) -> Token {
        let text = self.cursor.slice_from(start);
        let span = Span::from_range(start..self.cursor.pos());
        Token::new(kind, self.interner.intern(text), line, span)
    }

    fn push(&mut self, kind: TokenKind, start: usize, line: u32) {
        let token = self.token(kind, start, line);
        self.output.tokens.push(token);
    }

    fn error(&mut self, kind: LexErrorKind, start: usize, line: u32) {
        self.output.errors.push(LexError {
            kind,
            span: Span::from_range(start..self.cursor.pos()),
            line,
        });
    }
}

//! Token types produced by the lexer.

use std::fmt;
use std::ops::Index;

use num_bigint::BigInt;

use super::{Name, Span};

/// Token kinds.
///
/// Fieldless so that `TokenKind` is `Copy` and fits the parser's `u128`
/// recovery bitsets. Literal payloads live on [`Token::literal`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Punctuation
    LParen,
    RParen,
    Comma,
    Semicolon,

    // Operators
    Slash,
    Star,
    Plus,
    Minus,
    /// `:=`
    Assign,
    /// `=` (comparison)
    Eq,
    /// `!=` or `<>`
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Literals and names
    Number,
    Ident,

    // Keywords
    Begin,
    End,
    And,
    Or,
    Not,
    If,
    Then,
    Else,
    True,
    False,
    While,
    Do,
    Func,
    Program,

    Eof,
}

impl TokenKind {
    /// Highest discriminant index; recovery sets rely on it staying below 128.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::Eof as u8;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 32] = [
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Assign,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Number,
        TokenKind::Ident,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::True,
        TokenKind::False,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Func,
        TokenKind::Program,
        TokenKind::Eof,
    ];

    /// Bit position of this kind in a token bitset.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Human-readable name used in parser messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Assign => ":=",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "<>",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Func => "func",
            TokenKind::Program => "program",
            TokenKind::Eof => "end of file",
        }
    }

    /// Check if this is one of the six comparison operators.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Check if this is a reserved word.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Begin
                | TokenKind::End
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::True
                | TokenKind::False
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Func
                | TokenKind::Program
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Literal payload carried by number and boolean tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(BigInt),
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A token with its source text, line, and location.
///
/// Equality compares lexemes only: two tokens are equal when their source
/// text is equal, whatever their kind or position. Function lookup and
/// variable binding depend on this.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Name,
    pub literal: Option<Literal>,
    /// 1-based line number.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Name, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme,
            literal: None,
            line,
            span,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

/// Ordered token stream. The lexer always terminates it with an `Eof` token.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds of all tokens, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

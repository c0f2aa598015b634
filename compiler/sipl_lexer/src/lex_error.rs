//! Lexer error types.

use std::fmt;

use sipl_ir::Span;

/// A lexer error. Recorded without stopping the scan.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// 1-based line of the offending character.
    pub line: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter(char),
    /// `:` not followed by `=`.
    LoneColon,
    /// `!` not followed by `=`.
    LoneBang,
}

impl LexErrorKind {
    /// The offending source text.
    pub fn text(self) -> String {
        match self {
            LexErrorKind::UnexpectedCharacter(c) => c.to_string(),
            LexErrorKind::LoneColon => ":".to_string(),
            LexErrorKind::LoneBang => "!".to_string(),
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => write!(f, "unexpected character"),
            LexErrorKind::LoneColon => write!(f, "expected '=' after ':'"),
            LexErrorKind::LoneBang => write!(f, "expected '=' after '!'"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {} '{}'", self.line, self.kind, self.kind.text())
    }
}

impl std::error::Error for LexError {}

//! Error recovery for the parser.
//!
//! Panic-mode recovery: after a syntax error the parser records it, then
//! skips tokens until one in the site's recovery set (or `Eof`) is current.
//! Token sets are `u128` bitsets for O(1) membership testing.

use sipl_ir::TokenKind;

use crate::Cursor;

// TokenSet uses a u128 bitset, so all discriminant indices must fit in 0..127.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT <= 127,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// ```text
/// const BOUNDARY: TokenSet = TokenSet::new()
///     .with(TokenKind::Semicolon)
///     .with(TokenKind::End);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

/// Recovery set inside a function declaration: the next declaration or
/// the main block.
pub const FUNCTION_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Func)
    .with(TokenKind::Begin);

/// Recovery set inside a block or statement: a statement boundary.
pub const STATEMENT_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::End)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Func)
    .with(TokenKind::If)
    .with(TokenKind::While);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
/// Never consumes the recovery token itself.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    false
}

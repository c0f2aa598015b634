//! Reserved word lookup.

use sipl_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers. Keywords are case-sensitive.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // All keywords are 2-7 chars
    if !(2..=7).contains(&text.len()) {
        return None;
    }

    match text {
        "begin" => Some(TokenKind::Begin),
        "end" => Some(TokenKind::End),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "not" => Some(TokenKind::Not),
        "if" => Some(TokenKind::If),
        "then" => Some(TokenKind::Then),
        "else" => Some(TokenKind::Else),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "while" => Some(TokenKind::While),
        "do" => Some(TokenKind::Do),
        "func" => Some(TokenKind::Func),
        "program" => Some(TokenKind::Program),
        _ => None,
    }
}

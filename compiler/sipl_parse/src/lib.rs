//! Recursive descent parser for SIPL.
//!
//! Produces a [`Program`] whose nodes live in a flat [`ExprArena`].
//! Syntax errors never stop the parse: each one is recorded, the cursor
//! skips to a synchronization token, and parsing resumes. Any recorded
//! error means the program must not be evaluated.

mod cursor;
mod error;
mod grammar;
pub mod recovery;

pub use cursor::Cursor;
pub use error::{ErrorSite, ParseError, ParseErrorKind};
pub use recovery::{synchronize, TokenSet};

use sipl_ir::{Expr, ExprArena, ExprId, ExprKind, Program, Span, StringInterner, TokenList};
use tracing::debug;

/// Result of parsing one token stream.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    /// `None` only when the stream does not start with `program`.
    pub program: Option<Program>,
    pub arena: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len() * 2),
            errors: Vec::new(),
        }
    }

    /// Record an error and skip to the next token in `recovery`.
    fn recover(&mut self, error: ParseError, recovery: TokenSet) {
        debug!(line = error.line, message = %error.message, "syntax error");
        self.errors.push(error);
        synchronize(&mut self.cursor, recovery);
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, line: u32, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, line, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}

/// Parse a token stream into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let mut parser = Parser::new(tokens, interner);
    let program = parser.parse_program();

    debug!(
        functions = program.as_ref().map_or(0, |p| p.functions.len()),
        exprs = parser.arena.expr_count(),
        stmts = parser.arena.stmt_count(),
        errors = parser.errors.len(),
        "parsed program"
    );

    ParseOutput {
        program,
        arena: parser.arena,
        errors: parser.errors,
    }
}

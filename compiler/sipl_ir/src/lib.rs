//! Intermediate representation shared by every SIPL phase.
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] / [`StringInterner`]: interned identifiers and lexemes
//! - [`Token`] / [`TokenKind`] / [`TokenList`]: lexer output
//! - [`ast`]: arena-allocated statements and expressions produced by the parser

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    ArithOp, Block, Expr, ExprArena, ExprId, ExprKind, ExprRange, Function, LogicalOp, Param,
    Program, Stmt, StmtId, StmtKind, StmtRange, UnaryOp,
};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Literal, Token, TokenKind, TokenList};

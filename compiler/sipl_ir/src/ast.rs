//! Abstract syntax tree.
//!
//! Flat, arena-allocated representation: child nodes are referenced by
//! [`ExprId`]/[`StmtId`] indices into an [`ExprArena`], never boxed.
//! Nodes are immutable once the parser hands the arena over.

mod arena;
mod ids;

pub use arena::ExprArena;
pub use ids::{ExprId, ExprRange, StmtId, StmtRange};

use std::fmt;

use super::{Literal, Name, Span, TokenKind};

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `not x`
    Not,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

/// Integer operators: the four arithmetic operations and the six comparisons.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl ArithOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Eq => "=",
            ArithOp::NotEq => "<>",
            ArithOp::Lt => "<",
            ArithOp::LtEq => "<=",
            ArithOp::Gt => ">",
            ArithOp::GtEq => ">=",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<ArithOp> {
        match kind {
            TokenKind::Plus => Some(ArithOp::Add),
            TokenKind::Minus => Some(ArithOp::Sub),
            TokenKind::Star => Some(ArithOp::Mul),
            TokenKind::Slash => Some(ArithOp::Div),
            TokenKind::Eq => Some(ArithOp::Eq),
            TokenKind::NotEq => Some(ArithOp::NotEq),
            TokenKind::Lt => Some(ArithOp::Lt),
            TokenKind::LtEq => Some(ArithOp::LtEq),
            TokenKind::Gt => Some(ArithOp::Gt),
            TokenKind::GtEq => Some(ArithOp::GtEq),
            _ => None,
        }
    }

    /// Comparisons produce booleans; the rest produce integers.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            ArithOp::Eq | ArithOp::NotEq | ArithOp::Lt | ArithOp::LtEq | ArithOp::Gt | ArithOp::GtEq
        )
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `and` / `or`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    /// Line of the token runtime errors for this node are reported against.
    pub line: u32,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32, span: Span) -> Self {
        Expr { kind, line, span }
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// Number, `true`, or `false`.
    Literal(Literal),
    /// Variable read.
    Variable(Name),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `+ - * /` and the comparisons.
    Arith {
        op: ArithOp,
        left: ExprId,
        right: ExprId,
    },
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    /// `if c then a else b` in expression position; `else` is optional.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },
    /// `f(a, b)`; an empty range means `f()`.
    Call {
        callee: Name,
        args: ExprRange,
    },
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32, span: Span) -> Self {
        Stmt { kind, line, span }
    }
}

/// Statement variants.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// `x := expr`
    Assign { target: Name, value: ExprId },
    If {
        cond: ExprId,
        then_block: Block,
        else_block: Option<Block>,
    },
    While { cond: ExprId, body: Block },
}

/// `begin s1; s2; ... end`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

/// Function parameter.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// `func name(params) = body`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Function {
    pub name: Name,
    pub params: Vec<Param>,
    pub body: ExprId,
    pub line: u32,
    pub span: Span,
}

/// Parsed program: function declarations in source order, then the main block.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Program {
    pub functions: Vec<Function>,
    pub body: Block,
}

#[cfg(test)]
mod tests;

//! SIPL pretty-printer.
//!
//! Renders a parsed program back to canonical source text: one statement
//! per line, four-space indentation, nested blocks opened on the line of
//! their `if`/`while`. Parentheses are inserted only where the grammar
//! needs them to rebuild the same tree, so formatting output and parsing
//! it again yields an identical AST.
//!
//! Two grammar shapes show up in the output and surprise readers: `*`/`/`
//! chains associate to the right (`a / b / c` means `a / (b / c)`, and a
//! left-nested division is printed as `(a / b) / c`), and comparisons do
//! not chain (`(a < b) = c` keeps its parentheses).

mod emitter;
pub mod precedence;

pub use emitter::{Emitter, StringEmitter};
pub use precedence::Prec;

use sipl_ir::{
    Block, ExprArena, ExprId, ExprKind, Program, StmtId, StmtKind, StringInterner, UnaryOp,
};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Formats programs and expressions into an [`Emitter`].
pub struct Formatter<'a, E: Emitter> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    emitter: E,
    indent: usize,
}

impl<'a, E: Emitter> Formatter<'a, E> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner, emitter: E) -> Self {
        Formatter {
            arena,
            interner,
            emitter,
            indent: 0,
        }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Emit a whole program.
    pub fn program(&mut self, program: &Program) {
        self.emitter.emit("program");
        self.emitter.emit_newline();

        for (i, function) in program.functions.iter().enumerate() {
            if i > 0 {
                self.emitter.emit(";");
                self.emitter.emit_newline();
            }
            self.emitter.emit("func ");
            self.emitter.emit(self.interner.lookup(function.name));
            self.emitter.emit("(");
            for (j, param) in function.params.iter().enumerate() {
                if j > 0 {
                    self.emitter.emit(", ");
                }
                self.emitter.emit(self.interner.lookup(param.name));
            }
            self.emitter.emit(") = ");
            self.expr_at(function.body, Prec::EXPRESSION);
        }
        if !program.functions.is_empty() {
            self.emitter.emit_newline();
        }

        self.block(program.body);
        self.emitter.emit_newline();
    }

    /// Emit `begin ... end`, starting at the current column.
    fn block(&mut self, block: Block) {
        let stmts = self.arena.get_stmt_list(block.stmts);
        if stmts.is_empty() {
            self.emitter.emit("begin end");
            return;
        }

        self.emitter.emit("begin");
        self.indent += 1;
        for (i, &stmt) in stmts.iter().enumerate() {
            if i > 0 {
                self.emitter.emit(";");
            }
            self.emitter.emit_newline();
            self.emitter.emit_indent(self.indent * INDENT_WIDTH);
            self.stmt(stmt);
        }
        self.indent -= 1;
        self.emitter.emit_newline();
        self.emitter.emit_indent(self.indent * INDENT_WIDTH);
        self.emitter.emit("end");
    }

    fn stmt(&mut self, id: StmtId) {
        let stmt = self.arena.get_stmt(id);
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                self.emitter.emit(self.interner.lookup(*target));
                self.emitter.emit(" := ");
                self.expr_at(*value, Prec::BOOL_EXPR);
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                self.emitter.emit("if ");
                self.expr_at(*cond, Prec::BOOL_EXPR);
                self.emitter.emit(" then ");
                self.block(*then_block);
                if let Some(else_block) = else_block {
                    self.emitter.emit(" else ");
                    self.block(*else_block);
                }
            }
            StmtKind::While { cond, body } => {
                self.emitter.emit("while ");
                self.expr_at(*cond, Prec::BOOL_EXPR);
                self.emitter.emit(" do ");
                self.block(*body);
            }
        }
    }

    /// Emit an expression, parenthesized if it binds looser than `min`.
    pub fn expr_at(&mut self, id: ExprId, min: Prec) {
        let kind = &self.arena.get_expr(id).kind;
        if Prec::of(kind) < min {
            self.parenthesized(id);
        } else {
            self.expr(id);
        }
    }

    /// Emit an operand of an operator. An `if` expression there always gets
    /// parentheses, or its last branch would swallow the rest of the operator.
    fn operand(&mut self, id: ExprId, min: Prec) {
        if matches!(self.arena.get_expr(id).kind, ExprKind::If { .. }) {
            self.parenthesized(id);
        } else {
            self.expr_at(id, min);
        }
    }

    fn parenthesized(&mut self, id: ExprId) {
        self.emitter.emit("(");
        self.expr(id);
        self.emitter.emit(")");
    }

    fn expr(&mut self, id: ExprId) {
        let kind = &self.arena.get_expr(id).kind;
        match kind {
            ExprKind::Literal(literal) => self.emitter.emit(&literal.to_string()),
            ExprKind::Variable(name) => self.emitter.emit(self.interner.lookup(*name)),
            ExprKind::Unary { op, operand } => {
                self.emitter.emit(op.symbol());
                if *op == UnaryOp::Not {
                    self.emitter.emit_space();
                }
                self.operand(*operand, Prec::Unary);
            }
            ExprKind::Arith { op, left, right } => {
                self.binary(kind, *left, op.symbol(), *right);
            }
            ExprKind::Logical { op, left, right } => {
                self.binary(kind, *left, op.symbol(), *right);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.emitter.emit("if ");
                self.expr_at(*cond, Prec::BOOL_EXPR);
                self.emitter.emit(" then ");
                // An else-less `if` here would take the outer `else`.
                if else_branch.is_some() && self.ends_with_open_if(*then_branch) {
                    self.parenthesized(*then_branch);
                } else {
                    self.expr_at(*then_branch, Prec::EXPRESSION);
                }
                if let Some(else_branch) = else_branch {
                    self.emitter.emit(" else ");
                    self.expr_at(*else_branch, Prec::EXPRESSION);
                }
            }
            ExprKind::Call { callee, args } => {
                self.emitter.emit(self.interner.lookup(*callee));
                self.emitter.emit("(");
                for (i, &arg) in self.arena.get_expr_list(*args).iter().enumerate() {
                    if i > 0 {
                        self.emitter.emit(", ");
                    }
                    self.expr_at(arg, Prec::EXPRESSION);
                }
                self.emitter.emit(")");
            }
        }
    }

    /// Whether the printed form of `id` ends in an `if` with no `else`.
    fn ends_with_open_if(&self, id: ExprId) -> bool {
        match &self.arena.get_expr(id).kind {
            ExprKind::If {
                else_branch: None, ..
            } => true,
            ExprKind::If {
                else_branch: Some(else_branch),
                ..
            } => self.ends_with_open_if(*else_branch),
            _ => false,
        }
    }

    fn binary(&mut self, kind: &ExprKind, left: ExprId, symbol: &str, right: ExprId) {
        let Some((left_min, right_min)) = precedence::operand_prec(kind) else {
            return;
        };
        self.operand(left, left_min);
        self.emitter.emit_space();
        self.emitter.emit(symbol);
        self.emitter.emit_space();
        self.operand(right, right_min);
    }
}

/// Format a whole program to source text ending in a newline.
pub fn format_program(program: &Program, arena: &ExprArena, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(arena, interner, StringEmitter::with_capacity(256));
    formatter.program(program);
    let mut emitter = formatter.into_emitter();
    emitter.ensure_trailing_newline();
    emitter.output()
}

/// Format a single expression as it would appear as an assignment value.
pub fn format_expr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    let mut formatter = Formatter::new(arena, interner, StringEmitter::new());
    formatter.expr_at(id, Prec::BOOL_EXPR);
    formatter.into_emitter().output()
}

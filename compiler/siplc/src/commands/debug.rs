//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use std::fmt::Write;

use sipl_diagnostic::emitter::ColorMode;
use sipl_ir::{Block, ExprArena, ExprId, ExprKind, Program, StmtId, StmtKind, StringInterner};

use super::{read_file, report_frontend_errors};
use crate::error::CliError;
use crate::pipeline::{frontend, RunConfig, EXIT_COMPILE_ERROR, EXIT_OK};
use crate::report::emit_diagnostics;

/// Lex a file and print one `KIND 'lexeme' line` row per token.
///
/// Lexical errors are reported after the stream; syntax errors are ignored.
pub fn lex_file(path: &str, config: &RunConfig, color: ColorMode) -> Result<i32, CliError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let lexed = sipl_lexer::lex(&source, &interner);

    for tok in lexed.tokens.iter() {
        println!(
            "{:?} '{}' {}",
            tok.kind,
            interner.lookup(tok.lexeme),
            tok.line
        );
    }

    if lexed.has_errors() {
        let diagnostics: Vec<_> = lexed
            .errors
            .iter()
            .map(crate::problem::lex_error_to_diagnostic)
            .collect();
        emit_diagnostics(&diagnostics, config, color);
        return Ok(EXIT_COMPILE_ERROR);
    }
    Ok(EXIT_OK)
}

/// Parse a file and print its syntax tree.
pub fn parse_file(path: &str, config: &RunConfig, color: ColorMode) -> Result<i32, CliError> {
    let source = read_file(path)?;
    let front = frontend(&source);

    if let Some(code) = report_frontend_errors(&front, config, color) {
        return Ok(code);
    }
    let Some(program) = front.parsed.program.as_ref() else {
        return Ok(EXIT_COMPILE_ERROR);
    };

    print!(
        "{}",
        render_ast(program, &front.parsed.arena, &front.interner)
    );
    Ok(EXIT_OK)
}

/// Render a program as an indented tree, one node per line.
pub fn render_ast(program: &Program, arena: &ExprArena, interner: &StringInterner) -> String {
    let mut tree = AstTree {
        arena,
        interner,
        out: String::new(),
    };
    tree.line(0, "program");
    for function in &program.functions {
        let params: Vec<_> = function
            .params
            .iter()
            .map(|p| interner.lookup(p.name))
            .collect();
        tree.line(
            1,
            &format!(
                "func {}({}) [line {}]",
                interner.lookup(function.name),
                params.join(", "),
                function.line
            ),
        );
        tree.expr(2, function.body);
    }
    tree.block(1, program.body);
    tree.out
}

struct AstTree<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    out: String,
}

impl AstTree<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        let _ = writeln!(self.out, "{:width$}{text}", "", width = depth * 2);
    }

    fn block(&mut self, depth: usize, block: Block) {
        self.line(depth, "block");
        for &stmt in self.arena.get_stmt_list(block.stmts) {
            self.stmt(depth + 1, stmt);
        }
    }

    fn stmt(&mut self, depth: usize, id: StmtId) {
        let stmt = self.arena.get_stmt(id);
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                self.line(
                    depth,
                    &format!("assign {} [line {}]", self.interner.lookup(*target), stmt.line),
                );
                self.expr(depth + 1, *value);
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                self.line(depth, &format!("if [line {}]", stmt.line));
                self.expr(depth + 1, *cond);
                self.block(depth + 1, *then_block);
                if let Some(else_block) = else_block {
                    self.block(depth + 1, *else_block);
                }
            }
            StmtKind::While { cond, body } => {
                self.line(depth, &format!("while [line {}]", stmt.line));
                self.expr(depth + 1, *cond);
                self.block(depth + 1, *body);
            }
        }
    }

    fn expr(&mut self, depth: usize, id: ExprId) {
        match &self.arena.get_expr(id).kind {
            ExprKind::Literal(literal) => self.line(depth, &literal.to_string()),
            ExprKind::Variable(name) => {
                self.line(depth, &format!("var {}", self.interner.lookup(*name)));
            }
            ExprKind::Unary { op, operand } => {
                self.line(depth, op.symbol());
                self.expr(depth + 1, *operand);
            }
            ExprKind::Arith { op, left, right } => {
                self.line(depth, op.symbol());
                self.expr(depth + 1, *left);
                self.expr(depth + 1, *right);
            }
            ExprKind::Logical { op, left, right } => {
                self.line(depth, op.symbol());
                self.expr(depth + 1, *left);
                self.expr(depth + 1, *right);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.line(depth, "if-expr");
                self.expr(depth + 1, *cond);
                self.expr(depth + 1, *then_branch);
                if let Some(else_branch) = else_branch {
                    self.expr(depth + 1, *else_branch);
                }
            }
            ExprKind::Call { callee, args } => {
                self.line(depth, &format!("call {}", self.interner.lookup(*callee)));
                for &arg in self.arena.get_expr_list(*args) {
                    self.expr(depth + 1, arg);
                }
            }
        }
    }
}

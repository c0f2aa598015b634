//! Tree-walking interpreter.
//!
//! Statements and expressions are evaluated by exhaustive `match` over the
//! arena nodes. The first runtime error aborts evaluation; it carries the
//! line of the innermost node that failed and, inside a function, a
//! backtrace of the calls leading to it.

mod ops;

use sipl_ir::{
    Block, ExprArena, ExprId, ExprKind, Function, LogicalOp, Name, Program, Span, StmtId,
    StmtKind, StringInterner,
};
use sipl_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::call_stack::{CallFrame, CallStack};
use crate::errors::{
    arity_mismatch, missing_else_branch, type_mismatch, undefined_function, undefined_variable,
    EvalResult,
};
use crate::{Bindings, Environment, EvalConfig, FunctionRegistry, Value};

/// Interpreter state for one program run.
pub struct Interpreter<'p> {
    program: &'p Program,
    arena: &'p ExprArena,
    interner: &'p StringInterner,
    functions: FunctionRegistry<'p>,
    env: Environment,
    call_stack: CallStack,
}

impl<'p> Interpreter<'p> {
    /// Prepare to run `program`, registering every function declaration.
    pub fn new(
        program: &'p Program,
        arena: &'p ExprArena,
        interner: &'p StringInterner,
        config: &EvalConfig,
    ) -> Self {
        Interpreter {
            program,
            arena,
            interner,
            functions: FunctionRegistry::from_program(program),
            env: Environment::new(),
            call_stack: CallStack::new(config.max_call_depth),
        }
    }

    /// Run the main block against the global scope and snapshot the globals.
    pub fn run(mut self) -> EvalResult<Bindings> {
        debug!(
            functions = self.functions.len(),
            statements = self.program.body.stmts.len(),
            "evaluating program"
        );

        // The main block binds directly into the global scope.
        self.exec_stmts(self.program.body)?;

        let mut bindings = Bindings::new();
        for (name, value) in self.env.globals() {
            bindings.insert(self.interner.lookup(name), value.clone());
        }
        debug!(bindings = bindings.len(), "evaluation finished");
        Ok(bindings)
    }

    fn name(&self, name: Name) -> &'p str {
        self.interner.lookup(name)
    }

    // Statements

    fn exec_stmts(&mut self, block: Block) -> EvalResult<()> {
        for &stmt in self.arena.get_stmt_list(block.stmts) {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Run a nested block in a fresh child scope, popping it even on failure.
    fn exec_block(&mut self, block: Block) -> EvalResult<()> {
        self.env.push_scope();
        let result = self.exec_stmts(block);
        self.env.pop_scope();
        result
    }

    fn exec_stmt(&mut self, id: StmtId) -> EvalResult<()> {
        let stmt = self.arena.get_stmt(id);
        match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(*value)?;
                self.env.assign(*target, value);
                Ok(())
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                if self.eval_condition(*cond, "condition of 'if'", stmt.line, stmt.span)? {
                    self.exec_block(*then_block)
                } else if let Some(else_block) = else_block {
                    self.exec_block(*else_block)
                } else {
                    Ok(())
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_condition(*cond, "condition of 'while'", stmt.line, stmt.span)? {
                    self.exec_block(*body)?;
                }
                Ok(())
            }
        }
    }

    // Expressions

    /// Evaluate an expression, growing the host stack when deeply nested.
    fn eval_expr(&mut self, id: ExprId) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult<Value> {
        let expr = self.arena.get_expr(id);
        let result = match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal.clone())),
            ExprKind::Variable(name) => self
                .env
                .lookup(*name)
                .cloned()
                .ok_or_else(|| undefined_variable(self.name(*name))),
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(*operand)?;
                ops::evaluate_unary(*op, operand)
            }
            ExprKind::Arith { op, left, right } => {
                let left = self.eval_expr(*left)?;
                let right = self.eval_expr(*right)?;
                ops::evaluate_arith(*op, left, right)
            }
            ExprKind::Logical { op, left, right } => {
                // The right operand is evaluated first and can decide the
                // result alone; otherwise the result is the left operand's.
                let context = format!("'{}'", op.symbol());
                let right = self.eval_condition(*right, &context, expr.line, expr.span)?;
                match (*op, right) {
                    (LogicalOp::Or, true) => Ok(Value::Bool(true)),
                    (LogicalOp::And, false) => Ok(Value::Bool(false)),
                    _ => self
                        .eval_condition(*left, &context, expr.line, expr.span)
                        .map(Value::Bool),
                }
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(*cond, "condition of 'if'", expr.line, expr.span)? {
                    self.eval_expr(*then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_expr(*else_branch)
                } else {
                    Err(missing_else_branch())
                }
            }
            ExprKind::Call { callee, args } => {
                let function = self
                    .functions
                    .get(*callee)
                    .ok_or_else(|| undefined_function(self.name(*callee)))?;
                let mut values = Vec::with_capacity(args.len());
                for &arg in self.arena.get_expr_list(*args) {
                    values.push(self.eval_expr(arg)?);
                }
                self.call_function(function, values, expr.line)
            }
        };
        result.map_err(|error| error.or_at(expr.line, expr.span))
    }

    /// Evaluate a condition that must produce a boolean.
    ///
    /// A non-boolean result is reported at `line`, the line of the `if`,
    /// `while`, or operator that owns the condition.
    fn eval_condition(
        &mut self,
        id: ExprId,
        context: &str,
        line: u32,
        span: Span,
    ) -> EvalResult<bool> {
        match self.eval_expr(id)? {
            Value::Bool(b) => Ok(b),
            other => Err(type_mismatch(context, "boolean", other.type_name()).or_at(line, span)),
        }
    }

    /// Call `function` with already-evaluated arguments.
    ///
    /// The body runs in a detached scope holding only the parameters; the
    /// caller's scope is restored whether or not the body succeeds.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.interner.lookup(function.name), depth = self.call_stack.depth())
    )]
    fn call_function(
        &mut self,
        function: &'p Function,
        args: Vec<Value>,
        call_line: u32,
    ) -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(arity_mismatch(
                self.name(function.name),
                function.params.len(),
                args.len(),
            ));
        }

        self.call_stack.push(CallFrame {
            name: function.name,
            call_line,
        })?;
        self.env.push_detached_scope();
        for (param, value) in function.params.iter().zip(args) {
            self.env.assign(param.name, value);
        }

        let result = self
            .eval_expr(function.body)
            .map_err(|error| self.call_stack.attach_backtrace(error, self.interner));

        self.env.pop_scope();
        self.call_stack.pop();
        result
    }
}

/// Evaluate a parsed program and return its final global bindings.
pub fn evaluate(
    program: &Program,
    arena: &ExprArena,
    interner: &StringInterner,
    config: &EvalConfig,
) -> EvalResult<Bindings> {
    Interpreter::new(program, arena, interner, config).run()
}

#[cfg(test)]
mod tests;

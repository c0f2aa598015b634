//! Expression parsing.
//!
//! Precedence chain, lowest to highest:
//!
//! ```text
//! boolExpr → or
//! or       → and ('or' and)*
//! and      → equality ('and' unary)*
//! equality → addsub (CMP addsub)?
//! addsub   → muldiv (('+' | '-') muldiv)*
//! muldiv   → unary (('*' | '/') muldiv)?
//! unary    → ('-' | 'not') unary | primary
//! ```
//!
//! Two shapes here are easy to misread. `*` and `/` associate to the
//! right, so `100 / 10 / 2` is `100 / (10 / 2)`. A comparison is taken at
//! most once, so `a < b < c` stops after `a < b`. The right operand of
//! `and` is a unary expression, not a comparison.

use sipl_ir::{ArithOp, ExprId, ExprKind, Literal, LogicalOp, TokenKind, UnaryOp};
use sipl_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `boolExpr → or`
    pub(crate) fn parse_bool_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// `expression → equality`
    pub(crate) fn parse_expression(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_equality())
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_and()?;

        while self.cursor.check(TokenKind::Or) {
            let line = self.cursor.advance().line;
            let right = self.parse_and()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(
                ExprKind::Logical {
                    op: LogicalOp::Or,
                    left,
                    right,
                },
                line,
                span,
            );
        }

        Ok(left)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_equality()?;

        while self.cursor.check(TokenKind::And) {
            let line = self.cursor.advance().line;
            let right = self.parse_unary()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(
                ExprKind::Logical {
                    op: LogicalOp::And,
                    left,
                    right,
                },
                line,
                span,
            );
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_addsub()?;

        let Some(op) = ArithOp::from_token_kind(self.cursor.current_kind())
            .filter(|op| op.is_comparison())
        else {
            return Ok(left);
        };
        let token = self.cursor.advance();
        let right = self.parse_addsub()?;
        let span = self.span_of(left).merge(self.span_of(right));
        Ok(self.alloc(ExprKind::Arith { op, left, right }, token.line, span))
    }

    fn parse_addsub(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_muldiv()?;

        while let Some(op @ (ArithOp::Add | ArithOp::Sub)) =
            ArithOp::from_token_kind(self.cursor.current_kind())
        {
            let line = self.cursor.advance().line;
            let right = self.parse_muldiv()?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Arith { op, left, right }, line, span);
        }

        Ok(left)
    }

    fn parse_muldiv(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_unary()?;

        let Some(op @ (ArithOp::Mul | ArithOp::Div)) =
            ArithOp::from_token_kind(self.cursor.current_kind())
        else {
            return Ok(left);
        };
        let line = self.cursor.advance().line;
        let right = ensure_sufficient_stack(|| self.parse_muldiv())?;
        let span = self.span_of(left).merge(self.span_of(right));
        Ok(self.alloc(ExprKind::Arith { op, left, right }, line, span))
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = UnaryOp::from_token_kind(self.cursor.current_kind()) else {
            return self.parse_primary();
        };
        let token = self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = token.span.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, token.line, span))
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();

        match token.kind {
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.cursor
                    .expect(TokenKind::RParen, "expected ')' after expression")?;
                Ok(inner)
            }
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Number => {
                let Some(literal @ Literal::Int(_)) = token.literal.clone() else {
                    return Err(self
                        .cursor
                        .error_here(ParseErrorKind::ExpectedExpression, "malformed number"));
                };
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Literal(literal), token.line, token.span))
            }
            TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                let literal = Literal::Bool(token.kind == TokenKind::True);
                Ok(self.alloc(ExprKind::Literal(literal), token.line, token.span))
            }
            TokenKind::Ident if self.cursor.peek_next_kind() == TokenKind::LParen => {
                self.parse_call()
            }
            TokenKind::Ident => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Variable(token.lexeme), token.line, token.span))
            }
            _ => Err(self
                .cursor
                .error_here(ParseErrorKind::ExpectedExpression, "expected expression")),
        }
    }

    /// `'if' boolExpr 'then' expression ('else' expression)?`
    fn parse_if_expr(&mut self) -> Result<ExprId, ParseError> {
        let if_token = self.cursor.advance();
        let cond = self.parse_bool_expr()?;
        self.cursor
            .expect(TokenKind::Then, "expected 'then' after condition")?;
        let then_branch = self.parse_expression()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let span = if_token.span.merge(self.cursor.previous_span());
        Ok(self.alloc(
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            },
            if_token.line,
            span,
        ))
    }

    /// `IDENT '(' args? ')'`
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let callee = self.cursor.advance();
        self.cursor
            .expect(TokenKind::LParen, "expected '(' after function name")?;

        let mut args = Vec::new();
        if !self.cursor.eat(TokenKind::RParen) {
            args.push(self.parse_expression()?);
            while !self.cursor.eat(TokenKind::RParen) {
                self.cursor
                    .expect(TokenKind::Comma, "expected ',' between arguments")?;
                args.push(self.parse_expression()?);
            }
        }

        let args = self.arena.alloc_expr_list(args);
        let span = callee.span.merge(self.cursor.previous_span());
        Ok(self.alloc(
            ExprKind::Call {
                callee: callee.lexeme,
                args,
            },
            callee.line,
            span,
        ))
    }
}

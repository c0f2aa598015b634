//! Program header and function declarations.

use sipl_ir::{Function, Param, Program, TokenKind};

use crate::recovery::FUNCTION_RECOVERY;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `program → 'program' functions? block`
    ///
    /// Returns `None` when the header is missing; nothing after it is
    /// attempted in that case.
    pub(crate) fn parse_program(&mut self) -> Option<Program> {
        if let Err(error) = self
            .cursor
            .expect(TokenKind::Program, "expected 'program' at start of source")
        {
            self.errors.push(error);
            return None;
        }

        let functions = self.parse_functions();
        let body = self.parse_block();

        if self.errors.is_empty() && !self.cursor.is_at_end() {
            let error = self.cursor.error_here(
                ParseErrorKind::TrailingInput,
                "expected end of input after program",
            );
            self.errors.push(error);
        }

        Some(Program { functions, body })
    }

    /// `functions → function (';' function)*`
    ///
    /// A `;` before the main block's `begin` is accepted. After a failed
    /// declaration the loop also resumes at a following `func` with no `;`.
    fn parse_functions(&mut self) -> Vec<Function> {
        let mut functions = Vec::new();
        if !self.cursor.check(TokenKind::Func) {
            return functions;
        }

        loop {
            let parsed = match self.parse_function() {
                Ok(function) => {
                    functions.push(function);
                    true
                }
                Err(error) => {
                    self.recover(error, FUNCTION_RECOVERY);
                    false
                }
            };

            if self.cursor.eat(TokenKind::Semicolon) {
                if self.cursor.check(TokenKind::Func) {
                    continue;
                }
                break;
            }
            if !parsed && self.cursor.check(TokenKind::Func) {
                continue;
            }
            break;
        }
        functions
    }

    /// `function → 'func' IDENT '(' params? ')' '=' expression`
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let func = self
            .cursor
            .expect(TokenKind::Func, "expected 'func'")?;
        let start = func.span;
        let line = func.line;

        let name = self.cursor.expect_ident("expected function name")?.lexeme;
        self.cursor
            .expect(TokenKind::LParen, "expected '(' after function name")?;
        let params = self.parse_params()?;
        self.cursor
            .expect(TokenKind::RParen, "expected ')' after parameters")?;
        self.cursor
            .expect(TokenKind::Eq, "expected '=' before function body")?;
        let body = self.parse_expression()?;

        Ok(Function {
            name,
            params,
            body,
            line,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `params → IDENT (',' IDENT)*`, possibly empty.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.cursor.check(TokenKind::RParen) {
            return Ok(params);
        }

        let first = self.cursor.expect_ident("expected parameter name")?;
        params.push(Param {
            name: first.lexeme,
            span: first.span,
        });
        while self.cursor.eat(TokenKind::Comma) {
            let param = self
                .cursor
                .expect_ident("expected parameter name after ','")?;
            params.push(Param {
                name: param.lexeme,
                span: param.span,
            });
        }
        Ok(params)
    }
}

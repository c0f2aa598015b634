//! Blocks and statements.

use sipl_ir::{Block, Stmt, StmtId, StmtKind, TokenKind};

use crate::recovery::STATEMENT_RECOVERY;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `block → 'begin' statement (';' statement)* 'end'`
    ///
    /// Always yields a block; statements that failed to parse are left out.
    pub(crate) fn parse_block(&mut self) -> Block {
        let start = self.cursor.current_span();
        let mut stmts = Vec::new();

        if let Err(error) = self.parse_block_inner(&mut stmts) {
            self.recover(error, STATEMENT_RECOVERY);
            // The `end` we stopped at most likely closes this block.
            self.cursor.eat(TokenKind::End);
        }

        Block {
            stmts: self.arena.alloc_stmt_list(stmts),
            span: start.merge(self.cursor.previous_span()),
        }
    }

    fn parse_block_inner(&mut self, stmts: &mut Vec<StmtId>) -> Result<(), ParseError> {
        self.cursor.expect(TokenKind::Begin, "expected 'begin'")?;
        stmts.extend(self.parse_statement_or_recover());
        while self.cursor.eat(TokenKind::Semicolon) {
            stmts.extend(self.parse_statement_or_recover());
        }
        self.cursor
            .expect(TokenKind::End, "expected 'end' after block")?;
        Ok(())
    }

    fn parse_statement_or_recover(&mut self) -> Option<StmtId> {
        match self.parse_statement() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.recover(error, STATEMENT_RECOVERY);
                None
            }
        }
    }

    /// `statement → if-stmt | while-stmt | assignment`
    fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let line = self.cursor.current().line;

        let kind = match self.cursor.current_kind() {
            TokenKind::If => {
                self.cursor.advance();
                let cond = self.parse_bool_expr()?;
                self.cursor
                    .expect(TokenKind::Then, "expected 'then' after condition")?;
                let then_block = self.parse_block();
                let else_block = if self.cursor.eat(TokenKind::Else) {
                    Some(self.parse_block())
                } else {
                    None
                };
                StmtKind::If {
                    cond,
                    then_block,
                    else_block,
                }
            }
            TokenKind::While => {
                self.cursor.advance();
                let cond = self.parse_bool_expr()?;
                self.cursor
                    .expect(TokenKind::Do, "expected 'do' after condition")?;
                let body = self.parse_block();
                StmtKind::While { cond, body }
            }
            TokenKind::Ident => {
                let target = self.cursor.advance().lexeme;
                self.cursor
                    .expect(TokenKind::Assign, "expected ':=' after variable name")?;
                let value = self.parse_bool_expr()?;
                StmtKind::Assign { target, value }
            }
            _ => {
                return Err(self
                    .cursor
                    .error_here(ParseErrorKind::InvalidStatement, "invalid statement"));
            }
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(kind, line, span)))
    }
}

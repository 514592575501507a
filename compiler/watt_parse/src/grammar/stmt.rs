//! Statement parsing.

use watt_ir::{Stmt, StmtId, StmtKind};
use watt_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.start_offset();
        let kind = match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                StmtKind::Empty
            }
            TokenKind::LBrace => self.parse_block()?,
            TokenKind::Var => self.parse_var()?,
            TokenKind::Unit => self.parse_unit()?,
            TokenKind::Let => self.parse_let()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Ident(_) if self.cursor.peek_kind(1) == &TokenKind::ColonEq => {
                self.parse_assign()?
            }
            _ => {
                let expr = self.parse_expr()?;
                self.expect_terminator()?;
                StmtKind::Expr(expr)
            }
        };
        let location = self.cursor.location_from(start);
        Ok(self.arena.alloc_stmt(Stmt::new(kind, location)))
    }

    /// `;`, optional right before end of input.
    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.cursor.is_at_end() {
            return Ok(());
        }
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn parse_block(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("`}`"));
            }
            body.push(self.parse_stmt()?);
        }
        self.cursor.advance();
        Ok(StmtKind::Block(body))
    }

    /// `var name[: annotation][= init];`
    fn parse_var(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::Var)?;
        let name = self.cursor.expect_ident()?;
        let annotation = if self.cursor.eat(&TokenKind::Colon) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let init = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_terminator()?;
        Ok(StmtKind::Var {
            name,
            annotation,
            init,
        })
    }

    /// `unit name;` or `unit name = definition;`
    fn parse_unit(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::Unit)?;
        let name = self.cursor.expect_ident()?;
        let definition = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_terminator()?;
        Ok(StmtKind::Unit { name, definition })
    }

    fn parse_let(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::Let)?;
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        self.expect_terminator()?;
        Ok(StmtKind::Let { name, value })
    }

    fn parse_assign(&mut self) -> Result<StmtKind, ParseError> {
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::ColonEq)?;
        let value = self.parse_expr()?;
        self.expect_terminator()?;
        Ok(StmtKind::Assign { name, value })
    }

    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::If)?;
        self.cursor.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        let then_branch = self.parse_stmt()?;
        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            Some(self.parse_stmt()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::While)?;
        self.cursor.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        let body = self.parse_stmt()?;
        Ok(StmtKind::While { cond, body })
    }
}

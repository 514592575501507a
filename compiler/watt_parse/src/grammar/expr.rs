//! Expression parsing.
//!
//! Precedence, lowest first:
//! `||`, `&&`, comparisons, `as`, `+ -`, `* / %`, prefix `! + -`, ascription
//! (juxtaposition), `^`, primary.

use watt_ir::{BinaryOp, Expr, ExprId, ExprKind, LogicalOp, PrefixOp, TypeLiteral};
use watt_lexer::TokenKind;

use crate::{starts_unit_term, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.eat(&TokenKind::PipePipe) {
            let right = self.parse_and()?;
            left = self.logical(LogicalOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_comparison()?;
        while self.cursor.eat(&TokenKind::AmpAmp) {
            let right = self.parse_comparison()?;
            left = self.logical(LogicalOp::And, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_conversion()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::GtEq => BinaryOp::GtEq,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_conversion()?;
            left = self.binary(op, left, right);
        }
    }

    fn parse_conversion(&mut self) -> Result<ExprId, ParseError> {
        let mut value = self.parse_additive()?;
        while self.cursor.eat(&TokenKind::As) {
            let target = self.parse_additive()?;
            let location = self.merged(value, target);
            value = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Conversion { value, target }, location));
        }
        Ok(value)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = self.binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_prefix()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_prefix()?;
            left = self.binary(op, left, right);
        }
    }

    fn parse_prefix(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => PrefixOp::Not,
            TokenKind::Plus => PrefixOp::Plus,
            TokenKind::Minus => PrefixOp::Neg,
            _ => return self.parse_ascription(),
        };
        let start = self.cursor.start_offset();
        self.cursor.advance();
        let operand = self.parse_prefix()?;
        let location = self.cursor.location_from(start);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Prefix { op, operand }, location)))
    }

    fn parse_ascription(&mut self) -> Result<ExprId, ParseError> {
        let mut value = self.parse_power()?;
        while starts_unit_term(self.cursor.current_kind()) {
            let unit = self.parse_power()?;
            let location = self.merged(value, unit);
            value = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Ascription { value, unit }, location));
        }
        Ok(value)
    }

    fn parse_power(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.start_offset();
        let mut base = self.parse_primary()?;
        while self.cursor.eat(&TokenKind::Caret) {
            let exponent = self.parse_exponent()?;
            let location = self.cursor.location_from(start);
            base = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Power { base, exponent }, location));
        }
        Ok(base)
    }

    /// Signed numeric literal after `^`.
    fn parse_exponent(&mut self) -> Result<f64, ParseError> {
        let sign = if self.cursor.eat(&TokenKind::Minus) {
            -1.0
        } else {
            self.cursor.eat(&TokenKind::Plus);
            1.0
        };
        match self.cursor.current_kind() {
            TokenKind::Number(n) => {
                let n = *n;
                self.cursor.advance();
                Ok(sign * n)
            }
            other => Err(self.cursor.error(ParseErrorKind::ExpectedExponent {
                found: other.describe(),
            })),
        }
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.start_offset();
        let kind = match self.cursor.current_kind() {
            TokenKind::Number(n) => ExprKind::Number(*n),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Boolean => ExprKind::TypeLiteral(TypeLiteral::Boolean),
            TokenKind::Scalar => ExprKind::TypeLiteral(TypeLiteral::Scalar),
            TokenKind::Ident(name) => ExprKind::Ident(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                let location = self.cursor.location_from(start);
                return Ok(self
                    .arena
                    .alloc_expr(Expr::new(ExprKind::Paren(inner), location)));
            }
            other => {
                return Err(self.cursor.error(ParseErrorKind::ExpectedExpression {
                    found: other.describe(),
                }))
            }
        };
        self.cursor.advance();
        let location = self.cursor.location_from(start);
        Ok(self.arena.alloc_expr(Expr::new(kind, location)))
    }

    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let location = self.merged(left, right);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, location))
    }

    fn logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId) -> ExprId {
        let location = self.merged(left, right);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Logical { op, left, right }, location))
    }

    fn merged(&self, left: ExprId, right: ExprId) -> watt_ir::Location {
        self.arena
            .expr(left)
            .location
            .merge(self.arena.expr(right).location)
    }
}

//! Recursive descent parser for watt.
//!
//! Produces an [`Arena`] of located nodes. Parsing stops at the first error; the REPL
//! reports it and waits for the next line.

mod cursor;
mod error;
mod grammar;

use watt_ir::{Arena, ExprId, LineIndex, StmtId};
use watt_lexer::{lex, TokenKind};

use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// A parsed program: the node arena and its top-level statements in order.
#[derive(Clone, Debug)]
pub struct Program {
    pub arena: Arena,
    pub stmts: Vec<StmtId>,
}

/// A single parsed expression.
#[derive(Clone, Debug)]
pub struct ParsedExpr {
    pub arena: Arena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: Arena,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [watt_lexer::Token], index: &'a LineIndex) -> Self {
        Parser {
            cursor: Cursor::new(tokens, index),
            arena: Arena::new(),
        }
    }
}

/// Parse a sequence of statements.
///
/// The final expression statement may omit its `;`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = lex(source);
    let index = LineIndex::new(source);
    let mut parser = Parser::new(&tokens, &index);

    let mut stmts = Vec::new();
    while !parser.cursor.is_at_end() {
        stmts.push(parser.parse_stmt()?);
    }

    Ok(Program {
        arena: parser.arena,
        stmts,
    })
}

/// Parse exactly one expression, used by the REPL's inspection commands.
pub fn parse_expression(source: &str) -> Result<ParsedExpr, ParseError> {
    let tokens = lex(source);
    let index = LineIndex::new(source);
    let mut parser = Parser::new(&tokens, &index);

    let root = parser.parse_expr()?;
    if !parser.cursor.is_at_end() {
        return Err(parser.cursor.unexpected("end of input"));
    }

    Ok(ParsedExpr {
        arena: parser.arena,
        root,
    })
}

/// Whether a token can start the right operand of an ascription (`3 km`, `2 (m/s)`).
fn starts_unit_term(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident(_) | TokenKind::LParen | TokenKind::Scalar | TokenKind::Boolean
    )
}

#[cfg(test)]
mod tests;

//! Token cursor for navigating the token stream.

use watt_ir::{LineIndex, Location};
use watt_lexer::{Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

/// Cursor over a token list that always ends with `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    index: &'a LineIndex,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token], index: &'a LineIndex) -> Self {
        Cursor {
            tokens,
            index,
            pos: 0,
        }
    }

    /// Get the current token.
    ///
    /// Never moves past the trailing `Eof`, so the last token is returned once the
    /// stream is exhausted.
    #[inline]
    pub fn current(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// Kind of the token `n` positions ahead.
    pub fn peek_kind(&self, n: usize) -> &'a TokenKind {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)].kind
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advance and return the consumed token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a specific token or fail.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Consume an identifier and return its text.
    pub fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name.clone())
            }
            other => Err(self.error(ParseErrorKind::ExpectedIdentifier {
                found: other.describe(),
            })),
        }
    }

    /// Byte offset where the current token starts.
    pub fn start_offset(&self) -> usize {
        self.current().span.start
    }

    /// Location from `start` to the end of the last consumed token.
    pub fn location_from(&self, start: usize) -> Location {
        let end = if self.pos > 0 {
            self.tokens[self.pos - 1].span.end
        } else {
            start
        };
        self.index.location(start..end.max(start))
    }

    pub fn current_location(&self) -> Location {
        self.index.location(self.current().span.clone())
    }

    /// Error at the current token.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        let kind = if matches!(self.current_kind(), TokenKind::Error) {
            ParseErrorKind::InvalidCharacter
        } else {
            kind
        };
        ParseError::new(self.current_location(), kind)
    }

    pub fn unexpected(&self, expected: &str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current_kind().describe(),
        })
    }
}

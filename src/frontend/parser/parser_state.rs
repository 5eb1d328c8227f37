//! Parser state and error handling

use std::fmt;

use crate::frontend::lexer::{Keyword, Token, TokenKind};

/// What the parser wanted to see at a mandatory choice point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A specific keyword
    Keyword(Keyword),
    /// Any token of the given kind
    Kind(TokenKind),
    /// The start of a statement
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expected::Keyword(k) => write!(f, "keyword `{}`", k),
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Statement => f.write_str("a statement"),
        }
    }
}

/// Parse error types
///
/// Both variants are fatal: a production was partially matched and then a
/// mandatory token was missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Expected a specific token, found another one
    #[error("expected {expected}, found {found} (token #{position})")]
    UnexpectedToken {
        expected: Expected,
        found: Token,
        position: usize,
    },
    /// Input ended in the middle of a statement
    #[error("statement ended too early, expected {expected}")]
    UnexpectedEnd { expected: Expected },
}

/// Parser state: a cursor over the token slice
#[derive(Debug, Clone)]
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Tokens not consumed yet
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn at(
        &self,
        keyword: Keyword,
    ) -> bool {
        self.current().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Consume the keyword if it is next
    pub fn skip(
        &mut self,
        keyword: Keyword,
    ) -> bool {
        if self.at(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume an identifier if it is next
    pub fn try_identifier(&mut self) -> Option<&'a str> {
        match self.current() {
            Some(Token::Identifier(name)) => {
                self.pos += 1;
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// Consume the keyword or fail
    pub fn expect(
        &mut self,
        keyword: Keyword,
    ) -> Result<(), ParseError> {
        if self.skip(keyword) {
            Ok(())
        } else {
            Err(self.error(Expected::Keyword(keyword)))
        }
    }

    /// Consume a token of the given kind or fail
    pub fn expect_kind(
        &mut self,
        kind: TokenKind,
    ) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind() == kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.error(Expected::Kind(kind))),
        }
    }

    /// Build an error for the current position
    pub fn error(
        &self,
        expected: Expected,
    ) -> ParseError {
        match self.current() {
            Some(found) => ParseError::UnexpectedToken {
                expected,
                found: found.clone(),
                position: self.pos,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    /// Save current position for backtracking
    pub fn save_position(&self) -> usize {
        self.pos
    }

    /// Restore a previously saved position
    pub fn restore_position(
        &mut self,
        pos: usize,
    ) {
        self.pos = pos;
    }
}

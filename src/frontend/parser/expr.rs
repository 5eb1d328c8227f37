//! Flat expression parsing
//!
//! No precedence or arity is imposed here; a malformed run such as `加加`
//! is accepted and left for the host evaluator to reject.

use crate::frontend::lexer::{Keyword, Token, TokenKind};
use crate::frontend::parser::ast::Expression;
use crate::frontend::parser::{ParseError, ParserState};

impl<'a> ParserState<'a> {
    /// Parse an expression, consuming as many expression tokens as match
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.parse_expression_token()? {
            tokens.push(token);
        }
        Ok(Expression::new(tokens))
    }

    /// Parse one expression token; `None` leaves the position untouched
    fn parse_expression_token(&mut self) -> Result<Option<Token>, ParseError> {
        let token = match self.current() {
            Some(token) => token,
            None => return Ok(None),
        };

        match token {
            Token::IntegerLiteral(_) | Token::Identifier(_) => {
                self.bump();
                Ok(Some(token.clone()))
            }
            Token::Keyword(Keyword::OpenQuote) => {
                self.bump();
                let string = self.expect_kind(TokenKind::StringLiteral)?.clone();
                self.expect(Keyword::CloseQuote)?;
                Ok(Some(string))
            }
            Token::Keyword(k) if k.is_operator() => {
                self.bump();
                Ok(Some(token.clone()))
            }
            _ => Ok(None),
        }
    }
}

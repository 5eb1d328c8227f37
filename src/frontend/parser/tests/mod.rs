//! Parser tests


use crate::frontend::lexer::{tokenize, Token};
use crate::frontend::parser::{parse, Program};

/// Lex and parse, panicking on failure
fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source).unwrap();
    parse(&tokens).unwrap()
}

fn ident(s: &str) -> Token {
    Token::Identifier(s.to_string())
}

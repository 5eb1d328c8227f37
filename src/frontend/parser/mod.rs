//! Parser module
//!
//! Recursive-descent parser turning the token sequence into a flat list of
//! statements. Loop bodies are the only nesting.

pub mod ast;
pub mod expr;
pub mod parser_state;
pub mod statements;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{Expected, ParseError, ParserState};
pub use statements::StatementParser;

use crate::frontend::lexer::Token;

/// Parse a whole program
///
/// Tokens left over after the statement list (a stray `整完了。`, a loop
/// without a loop variable, ...) are reported as an unexpected token.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    tracing::debug!("parsing {} tokens", tokens.len());

    let mut state = ParserState::new(tokens);
    let statements = state.parse_statements()?;
    if !state.at_end() {
        return Err(state.error(Expected::Statement));
    }

    tracing::debug!("parsing complete, {} statements", statements.len());
    Ok(Program::new(statements))
}

/// Parse statements until one fails to start, returning the rest of the tokens
pub fn parse_statements(tokens: &[Token]) -> Result<(Vec<Statement>, &[Token]), ParseError> {
    let mut state = ParserState::new(tokens);
    let statements = state.parse_statements()?;
    Ok((statements, state.remaining()))
}

/// Parse a single statement
///
/// `Ok((None, tokens))` means no statement starts here; nothing is consumed.
pub fn parse_one_statement(tokens: &[Token]) -> Result<(Option<Statement>, &[Token]), ParseError> {
    let mut state = ParserState::new(tokens);
    let statement = state.parse_one_statement()?;
    Ok((statement, state.remaining()))
}

/// Parse a flat expression, returning the rest of the tokens
pub fn parse_expression(tokens: &[Token]) -> Result<(Expression, &[Token]), ParseError> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression()?;
    Ok((expr, state.remaining()))
}

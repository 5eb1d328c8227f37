//! Statement parsing
//!
//! Every production is recognized by its first one or two tokens. When no
//! production matches, nothing is consumed and `Ok(None)` is returned; this is
//! how the end of the program and the end of a loop body are found.

use crate::frontend::lexer::Keyword;
use crate::frontend::parser::ast::*;
use crate::frontend::parser::{ParseError, ParserState};

/// Statement parsing on top of [`ParserState`]
pub trait StatementParser {
    /// Parse statements until one fails to start
    fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError>;

    /// Parse one statement, `Ok(None)` if no statement starts here
    fn parse_one_statement(&mut self) -> Result<Option<Statement>, ParseError>;
}

impl StatementParser for ParserState<'_> {
    fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut stmts = Vec::new();
        while let Some(stmt) = self.parse_one_statement()? {
            tracing::trace!("parsed {} statement", stmt.kind_name());
            stmts.push(stmt);
        }
        Ok(stmts)
    }

    fn parse_one_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        if self.skip(Keyword::Say) {
            return parse_say_stmt(self).map(Some);
        }

        let start = self.save_position();
        let name = match self.try_identifier() {
            Some(name) => name.to_string(),
            None => return Ok(None),
        };

        if self.skip(Keyword::IsVar) {
            self.expect(Keyword::Period)?;
            return Ok(Some(Statement::VarDecl(name)));
        }
        if self.skip(Keyword::Become) {
            return parse_assign_stmt(self, name).map(Some);
        }
        if self.skip(Keyword::Inc) {
            self.expect(Keyword::Period)?;
            return Ok(Some(Statement::IncBy(name, Expression::one())));
        }
        if self.skip(Keyword::IncBy) {
            let expr = parse_step_amount(self)?;
            return Ok(Some(Statement::IncBy(name, expr)));
        }
        if self.skip(Keyword::Dec) {
            self.expect(Keyword::Period)?;
            return Ok(Some(Statement::DecBy(name, Expression::one())));
        }
        if self.skip(Keyword::DecBy) {
            let expr = parse_step_amount(self)?;
            return Ok(Some(Statement::DecBy(name, expr)));
        }
        if self.skip(Keyword::From) {
            return parse_loop_stmt(self, name).map(Some);
        }

        // An identifier alone does not start a statement
        self.restore_position(start);
        Ok(None)
    }
}

/// Parse the rest of `唠唠：expr。` after `唠唠`
fn parse_say_stmt(state: &mut ParserState<'_>) -> Result<Statement, ParseError> {
    state.expect(Keyword::Colon)?;
    let expr = state.parse_expression()?;
    state.expect(Keyword::Period)?;
    Ok(Statement::Say(expr))
}

/// Parse the rest of `name装expr。` after `装`
fn parse_assign_stmt(
    state: &mut ParserState<'_>,
    name: String,
) -> Result<Statement, ParseError> {
    let expr = state.parse_expression()?;
    state.expect(Keyword::Period)?;
    Ok(Statement::Assign(name, expr))
}

/// Parse `expr步。` after `走` or `退`
fn parse_step_amount(state: &mut ParserState<'_>) -> Result<Expression, ParseError> {
    let expr = state.parse_expression()?;
    state.expect(Keyword::Step)?;
    state.expect(Keyword::Period)?;
    Ok(expr)
}

/// Parse the rest of `name从expr到expr磨叽：stmts磨叽完了。` after `从`
fn parse_loop_stmt(
    state: &mut ParserState<'_>,
    var: String,
) -> Result<Statement, ParseError> {
    let from = state.parse_expression()?;
    state.expect(Keyword::To)?;
    let to = state.parse_expression()?;
    state.expect(Keyword::Loop)?;
    let body = state.parse_statements()?;
    state.expect(Keyword::EndLoop)?;
    Ok(Statement::Loop {
        var,
        from,
        to,
        body,
    })
}

//! Abstract Syntax Tree types
//!
//! The tree is flat apart from loop bodies: expressions stay unparsed token
//! runs and operator precedence is left to whatever evaluates the generated
//! host program.

use serde::Serialize;

use crate::frontend::lexer::Token;

/// Expression: a flat token run in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expression {
    pub tokens: Vec<Token>,
}

impl Expression {
    #[inline]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The literal `1` used by `走走` and `退退`
    pub fn one() -> Self {
        Self::new(vec![Token::IntegerLiteral(1)])
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

/// Statement
///
/// Variables are carried as the identifier token text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    /// `唠唠：expr。`
    Say(Expression),
    /// `name是活雷锋。`
    VarDecl(String),
    /// `name装expr。`
    Assign(String, Expression),
    /// `name走走。` / `name走expr步。`
    IncBy(String, Expression),
    /// `name退退。` / `name退expr步。`
    DecBy(String, Expression),
    /// `name从expr到expr磨叽：...磨叽完了。`, bounds inclusive
    Loop {
        var: String,
        from: Expression,
        to: Expression,
        body: Vec<Statement>,
    },
}

impl Statement {
    /// Short name of the statement kind, for logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Say(_) => "SAY",
            Statement::VarDecl(_) => "VAR_DECL",
            Statement::Assign(..) => "ASSIGN",
            Statement::IncBy(..) => "INC_BY",
            Statement::DecBy(..) => "DEC_BY",
            Statement::Loop { .. } => "LOOP",
        }
    }
}

/// Program: the top-level statements of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    #[inline]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

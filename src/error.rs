//! Unified error type for the translate-and-run pipeline

use std::path::PathBuf;

use crate::backends::ExecutorError;
use crate::frontend::lexer::LexError;
use crate::frontend::parser::ParseError;
use crate::middle::codegen::CodegenError;

/// Error category, stable across message wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedToken,
    UnrecognizedExpressionToken,
    IntegerOverflow,
    Execution,
    Io,
}

/// Any failure of the pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("Execution error: {0}")]
    Execute(#[from] ExecutorError),

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(LexError::IntegerOverflow { .. }) => ErrorKind::IntegerOverflow,
            Error::Parse(_) => ErrorKind::UnexpectedToken,
            Error::Codegen(CodegenError::UnrecognizedExpressionToken { .. }) => {
                ErrorKind::UnrecognizedExpressionToken
            }
            Error::Execute(_) => ErrorKind::Execution,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}

//! Backend abstraction layer for program execution
//!
//! The core hands generated host script text to an [`Executor`] and gets the
//! output accumulator back.
//!
//! # Architecture
//!
//! ```text
//! host script (from codegen)
//!         |
//!         v
//!    Interpreter
//!         |
//!         v
//!   output accumulator
//! ```

pub mod dev;
pub mod interpreter;

use crate::middle::codegen::DEFAULT_OUTPUT_VAR;

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Executor error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    /// The host script is malformed
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
    /// A name was read before it was assigned
    #[error("Name '{0}' is not defined")]
    UndefinedName(String),
    /// Operand types do not fit the operation
    #[error("Type error: {0}")]
    Type(String),
    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Integer arithmetic overflowed
    #[error("Integer overflow")]
    Overflow,
    /// The output accumulator vanished or is not a string
    #[error("Output accumulator '{0}' is missing or not a string")]
    MissingAccumulator(String),
}

/// Execution state of the last run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionState {
    /// Number of host statements executed
    pub statements_executed: usize,
    /// Whether execution is complete
    pub is_complete: bool,
}

/// Executor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Name of the output accumulator, pre-defined as an empty string
    pub output_var: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            output_var: DEFAULT_OUTPUT_VAR.to_string(),
        }
    }
}

/// Executor trait - all backends must implement this
///
/// Evaluation is deterministic and starts from an empty accumulator.
pub trait Executor {
    /// Evaluate host script source and return the accumulator text
    fn execute(
        &mut self,
        source: &str,
    ) -> ExecutorResult<String>;

    /// Reset the executor state
    fn reset(&mut self);

    /// Get current execution state
    fn state(&self) -> &ExecutionState;
}

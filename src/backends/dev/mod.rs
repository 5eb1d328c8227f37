//! Development tools for dongbei
//!
//! - REPL: interactive evaluation

pub mod repl;

pub use repl::{EvalResult, LineRepl, ReplConfig, Session};

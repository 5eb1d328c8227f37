//! Interpreter backend for generated host scripts
//!
//! The host script is a small indentation-structured language: assignments,
//! `+=`/`-=`, `pass` and `for NAME in range(a, b):` blocks. Expressions follow
//! the usual arithmetic precedence, which is where the flat source expressions
//! finally get their grouping.

pub mod ast;
pub mod executor;
pub mod lexer;
pub mod parser;
pub mod value;


pub use executor::Interpreter;
pub use value::Value;

//! Code generation
//!
//! This module handles the transformation from AST to host script text.

pub mod codegen;

pub use codegen::*;

//! 代码生成器
//!
//! 将语句列表渲染为宿主脚本文本。
//! 核心约定：
//! 1. 每条语句生成一行（循环生成一个缩进块）
//! 2. 表达式按源码顺序拼接，运算优先级交给宿主求值器
//! 3. 标识符经符号表改写为生成的变量名

pub mod expr;
pub mod stmt;
pub mod symbols;
#[cfg(test)]
mod tests;

use crate::frontend::lexer::Token;
use crate::frontend::parser::Program;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use symbols::{SymbolTable, DEFAULT_VAR_PREFIX};

/// Default name of the output accumulator
pub const DEFAULT_OUTPUT_VAR: &str = "_db_output";

/// 代码生成错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// 表达式中出现无法渲染的记号
    #[error("cannot render {token} in an expression")]
    UnrecognizedExpressionToken { token: Token },
}

/// 代码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenOptions {
    /// 每层缩进
    #[serde(default = "default_indent")]
    pub indent: String,
    /// 输出累加器变量名
    #[serde(default = "default_output_var")]
    pub output_var: String,
    /// 生成变量名前缀
    #[serde(default = "default_var_prefix")]
    pub var_prefix: String,
}

fn default_indent() -> String {
    "  ".to_string()
}

fn default_output_var() -> String {
    DEFAULT_OUTPUT_VAR.to_string()
}

fn default_var_prefix() -> String {
    DEFAULT_VAR_PREFIX.to_string()
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            output_var: default_output_var(),
            var_prefix: default_var_prefix(),
        }
    }
}

/// 代码生成器
///
/// 借用本次翻译的符号表；符号表不跨翻译共享。
#[derive(Debug)]
pub struct CodeGenerator<'s> {
    symbols: &'s mut SymbolTable,
    options: CodegenOptions,
}

impl<'s> CodeGenerator<'s> {
    pub fn new(symbols: &'s mut SymbolTable) -> Self {
        Self::with_options(symbols, CodegenOptions::default())
    }

    pub fn with_options(
        symbols: &'s mut SymbolTable,
        options: CodegenOptions,
    ) -> Self {
        Self { symbols, options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// 生成整个程序
    pub fn generate(
        &mut self,
        program: &Program,
    ) -> Result<String, CodegenError> {
        debug!(
            "generating host code for {} statements",
            program.statements.len()
        );

        let mut lines = vec![format!("{} = \"\"", self.options.output_var)];
        for stmt in &program.statements {
            self.emit_statement(stmt, 0, &mut lines)?;
        }

        debug!(
            "generated {} lines, {} symbols",
            lines.len(),
            self.symbols.len()
        );
        Ok(lines.join("\n"))
    }
}

/// Generate host code for `program` with default options
pub fn generate(
    program: &Program,
    symbols: &mut SymbolTable,
) -> Result<String, CodegenError> {
    CodeGenerator::new(symbols).generate(program)
}

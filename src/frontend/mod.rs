//! Frontend translation pipeline
//!
//! Lexer and parser, plus the [`Compiler`] that drives them together with the
//! code generator. Every translation gets its own symbol table.

use crate::error::Error;
use crate::frontend::lexer::Token;
use crate::frontend::parser::Program;
use crate::middle::codegen::{CodeGenerator, CodegenOptions, SymbolTable};
use tracing::debug;

pub mod lexer;
pub mod parser;

/// Result of one translation run
#[derive(Debug, Clone)]
pub struct Translation {
    /// Token sequence
    pub tokens: Vec<Token>,
    /// Parsed program
    pub program: Program,
    /// Symbol table used for this run
    pub symbols: SymbolTable,
    /// Generated host script
    pub code: String,
}

/// Compiler context
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CodegenOptions,
}

impl Compiler {
    /// Create a new compiler
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with custom code generation options
    pub fn with_options(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Translate source code to host script, keeping the intermediate stages
    pub fn compile(
        &self,
        source: &str,
    ) -> Result<Translation, Error> {
        debug!("Compiling source code ({} bytes)", source.len());
        let tokens = lexer::tokenize(source)?;

        let program = parser::parse(&tokens)?;

        let mut symbols = SymbolTable::with_prefix(self.options.var_prefix.clone());
        let code = CodeGenerator::with_options(&mut symbols, self.options.clone())
            .generate(&program)?;
        debug!("Translation complete, {} symbols", symbols.len());

        Ok(Translation {
            tokens,
            program,
            symbols,
            code,
        })
    }

    /// Translate source code to host script
    pub fn translate(
        &self,
        source: &str,
    ) -> Result<String, Error> {
        self.compile(source).map(|translation| translation.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_stages() {
        let translation = Compiler::new().compile("老王是活雷锋。").unwrap();
        assert_eq!(translation.tokens.len(), 3);
        assert_eq!(translation.program.statements.len(), 1);
        assert_eq!(translation.symbols.get("老王"), Some("_db_var0"));
        assert_eq!(translation.code, "_db_output = \"\"\n_db_var0 = None");
    }

    #[test]
    fn test_each_translation_starts_fresh() {
        let compiler = Compiler::new();
        compiler.translate("甲是活雷锋。").unwrap();
        let code = compiler.translate("乙是活雷锋。").unwrap();
        assert!(code.ends_with("_db_var0 = None"));
    }

    #[test]
    fn test_custom_options() {
        let compiler = Compiler::with_options(CodegenOptions {
            indent: "    ".into(),
            output_var: "out".into(),
            var_prefix: "v".into(),
        });
        let code = compiler
            .translate("我从1到2磨叽：唠唠：我。磨叽完了。")
            .unwrap();
        assert_eq!(
            code,
            "out = \"\"\nfor v0 in range(1, 2 + 1):\n    out += str(v0) + \"\\n\""
        );
    }
}

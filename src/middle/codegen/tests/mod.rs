//! 代码生成测试

mod expr;

use crate::frontend::lexer::tokenize;
use crate::frontend::parser::parse;
use crate::middle::codegen::{generate, SymbolTable};

/// 源码直接生成宿主代码
fn gen(source: &str) -> String {
    let tokens = tokenize(source).unwrap();
    let program = parse(&tokens).unwrap();
    let mut symbols = SymbolTable::new();
    generate(&program, &mut symbols).unwrap()
}

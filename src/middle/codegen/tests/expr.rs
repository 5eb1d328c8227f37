//! 表达式代码生成测试

use super::*;
use crate::frontend::lexer::{Keyword, Token};
use crate::frontend::parser::Expression;
use crate::middle::codegen::expr::quote_string;
use crate::middle::codegen::{CodeGenerator, CodegenError};

/// 测试表达式按源码顺序拼接
#[test]
fn test_expression_concatenates_in_order() {
    let mut symbols = SymbolTable::new();
    let mut generator = CodeGenerator::new(&mut symbols);
    let expr = Expression::new(vec![
        Token::IntegerLiteral(1),
        Token::Keyword(Keyword::Plus),
        Token::Identifier("老王".into()),
        Token::Keyword(Keyword::Times),
        Token::IntegerLiteral(3),
        Token::Keyword(Keyword::DivideBy),
        Token::IntegerLiteral(4),
        Token::Keyword(Keyword::Minus),
        Token::StringLiteral("嗨".into()),
    ]);
    assert_eq!(
        generator.render_expression(&expr).unwrap(),
        "1+_db_var0*3/4-\"嗨\""
    );
}

/// 测试无法渲染的记号
#[test]
fn test_unrecognized_expression_token() {
    let mut symbols = SymbolTable::new();
    let mut generator = CodeGenerator::new(&mut symbols);
    let expr = Expression::new(vec![
        Token::IntegerLiteral(1),
        Token::Keyword(Keyword::Say),
    ]);
    assert_eq!(
        generator.render_expression(&expr),
        Err(CodegenError::UnrecognizedExpressionToken {
            token: Token::Keyword(Keyword::Say)
        })
    );
}

/// 测试字符串转义
#[test]
fn test_quote_string_escapes() {
    assert_eq!(quote_string("你好"), "\"你好\"");
    assert_eq!(quote_string("a\"b\\c\nd"), "\"a\\\"b\\\\c\\nd\"");
}

/// 测试空表达式
#[test]
fn test_empty_expression() {
    let mut symbols = SymbolTable::new();
    let mut generator = CodeGenerator::new(&mut symbols);
    assert_eq!(generator.render_expression(&Expression::default()).unwrap(), "");
}

/// 测试相邻记号不加分隔
#[test]
fn test_adjacent_tokens_are_not_separated() {
    assert_eq!(
        gen("X装“a”“b”。"),
        "_db_output = \"\"\n_db_var0 = \"a\"\"b\""
    );
}

//! 表达式渲染

use crate::frontend::lexer::{Keyword, Token};
use crate::frontend::parser::Expression;

use super::{CodeGenerator, CodegenError};

/// Host infix symbol of an operator keyword
pub fn operator_symbol(keyword: Keyword) -> Option<&'static str> {
    match keyword {
        Keyword::Plus => Some("+"),
        Keyword::Minus => Some("-"),
        Keyword::Times => Some("*"),
        Keyword::DivideBy => Some("/"),
        _ => None,
    }
}

/// Quote string literal text for the host script
pub fn quote_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl CodeGenerator<'_> {
    /// Render an expression by concatenating its tokens in order
    pub fn render_expression(
        &mut self,
        expr: &Expression,
    ) -> Result<String, CodegenError> {
        let mut code = String::new();
        for token in &expr.tokens {
            match token {
                Token::IntegerLiteral(n) => code.push_str(&n.to_string()),
                Token::Identifier(name) => code.push_str(self.symbols.resolve(name)),
                Token::StringLiteral(s) => code.push_str(&quote_string(s)),
                Token::Keyword(k) => match operator_symbol(*k) {
                    Some(symbol) => code.push_str(symbol),
                    None => {
                        return Err(CodegenError::UnrecognizedExpressionToken {
                            token: token.clone(),
                        })
                    }
                },
            }
        }
        Ok(code)
    }
}

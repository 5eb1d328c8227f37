//! Lexer 单元测试

mod strings;

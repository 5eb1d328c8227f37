//! Token types

use serde::Serialize;
use std::fmt;

/// Lexer error
///
/// Unknown characters never fail lexing; they simply become identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("integer literal {digits} does not fit in a signed 64-bit integer")]
    IntegerOverflow { digits: String },
}

/// 关键字
///
/// Every variant has exactly one literal spelling, see [`Keyword::spelling`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    /// `装` - assignment
    Become,
    /// `开整了：` - begin marker (tokenized, never consumed)
    Begin,
    /// `”`
    CloseQuote,
    /// `：`
    Colon,
    /// `退退` - decrement by one
    Dec,
    /// `退` - decrement by an expression, closed by `步`
    DecBy,
    /// `除以`
    DivideBy,
    /// `整完了。` - end marker (tokenized, never consumed)
    End,
    /// `磨叽完了。`
    EndLoop,
    /// `从`
    From,
    /// `走走` - increment by one
    Inc,
    /// `走` - increment by an expression, closed by `步`
    IncBy,
    /// `是活雷锋` - variable declaration
    IsVar,
    /// `磨叽：`
    Loop,
    /// `减`
    Minus,
    /// `“`
    OpenQuote,
    /// `。` - statement terminator
    Period,
    /// `加`
    Plus,
    /// `唠唠`
    Say,
    /// `步`
    Step,
    /// `乘`
    Times,
    /// `到`
    To,
}

impl Keyword {
    /// Source text of the keyword
    pub const fn spelling(self) -> &'static str {
        match self {
            Keyword::Become => "装",
            Keyword::Begin => "开整了：",
            Keyword::CloseQuote => "”",
            Keyword::Colon => "：",
            Keyword::Dec => "退退",
            Keyword::DecBy => "退",
            Keyword::DivideBy => "除以",
            Keyword::End => "整完了。",
            Keyword::EndLoop => "磨叽完了。",
            Keyword::From => "从",
            Keyword::Inc => "走走",
            Keyword::IncBy => "走",
            Keyword::IsVar => "是活雷锋",
            Keyword::Loop => "磨叽：",
            Keyword::Minus => "减",
            Keyword::OpenQuote => "“",
            Keyword::Period => "。",
            Keyword::Plus => "加",
            Keyword::Say => "唠唠",
            Keyword::Step => "步",
            Keyword::Times => "乘",
            Keyword::To => "到",
        }
    }

    /// Whether the keyword is one of the four binary operators
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Keyword::Plus | Keyword::Minus | Keyword::Times | Keyword::DivideBy
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    IntegerLiteral,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::IntegerLiteral => "INTEGER",
        };
        f.write_str(name)
    }
}

/// Token
///
/// Two tokens are equal iff their kind and value are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    Keyword(Keyword),
    Identifier(String),
    StringLiteral(String),
    IntegerLiteral(i64),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
            Token::IntegerLiteral(_) => TokenKind::IntegerLiteral,
        }
    }

    /// Returns true if this token is the given keyword
    #[inline]
    pub fn is_keyword(
        &self,
        keyword: Keyword,
    ) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Token::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "{} <{}>", self.kind(), k),
            Token::Identifier(s) | Token::StringLiteral(s) => {
                write!(f, "{} <{:?}>", self.kind(), s)
            }
            Token::IntegerLiteral(n) => write!(f, "{} <{}>", self.kind(), n),
        }
    }
}

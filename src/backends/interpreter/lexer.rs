//! Host script line tokenizer

use std::iter::Peekable;
use std::str::Chars;

use crate::backends::{ExecutorError, ExecutorResult};

/// Host script token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostToken {
    Name(String),
    Int(i64),
    Str(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
    Colon,
    Eq,
    PlusEq,
    MinusEq,
}

/// Tokenize one line of host script. `line` is 1-based, for errors.
pub fn tokenize_line(
    text: &str,
    line: usize,
) -> ExecutorResult<Vec<HostToken>> {
    let mut chars = text.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => break,
            '0'..='9' => tokens.push(scan_int(&mut chars)?),
            '"' => {
                chars.next();
                tokens.push(scan_string(&mut chars, line)?);
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(HostToken::Name(name));
            }
            _ => {
                chars.next();
                let token = match c {
                    '+' if chars.next_if_eq(&'=').is_some() => HostToken::PlusEq,
                    '-' if chars.next_if_eq(&'=').is_some() => HostToken::MinusEq,
                    '+' => HostToken::Plus,
                    '-' => HostToken::Minus,
                    '*' => HostToken::Star,
                    '/' => HostToken::Slash,
                    '(' => HostToken::LParen,
                    ')' => HostToken::RParen,
                    ',' => HostToken::Comma,
                    ':' => HostToken::Colon,
                    '=' => HostToken::Eq,
                    other => {
                        return Err(ExecutorError::Syntax {
                            line,
                            message: format!("unexpected character '{}'", other),
                        })
                    }
                };
                tokens.push(token);
            }
        }
    }

    Ok(tokens)
}

fn scan_int(chars: &mut Peekable<Chars<'_>>) -> ExecutorResult<HostToken> {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
        .parse::<i64>()
        .map(HostToken::Int)
        .map_err(|_| ExecutorError::Overflow)
}

/// Scan a string literal; the opening quote is already consumed
fn scan_string(
    chars: &mut Peekable<Chars<'_>>,
    line: usize,
) -> ExecutorResult<HostToken> {
    let mut s = String::new();
    loop {
        match chars.next() {
            Some('"') => return Ok(HostToken::Str(s)),
            Some('\\') => {
                let escaped = match chars.next() {
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some('t') => '\t',
                    Some('"') => '"',
                    Some('\\') => '\\',
                    Some(other) => {
                        return Err(ExecutorError::Syntax {
                            line,
                            message: format!("invalid escape '\\{}'", other),
                        })
                    }
                    None => break,
                };
                s.push(escaped);
            }
            Some(c) => s.push(c),
            None => break,
        }
    }
    Err(ExecutorError::Syntax {
        line,
        message: "unterminated string".to_string(),
    })
}

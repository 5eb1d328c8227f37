//! Host script parser
//!
//! Lines are grouped into blocks by indentation; expressions are parsed with
//! binding powers so that `*` and `/` group before `+` and `-`.

use super::ast::*;
use super::lexer::{tokenize_line, HostToken};
use crate::backends::{ExecutorError, ExecutorResult};

/// Binding power levels
pub const BP_LOWEST: u8 = 0;
pub const BP_TERM: u8 = 6;
pub const BP_FACTOR: u8 = 7;
pub const BP_UNARY: u8 = 8;

/// A non-blank line of host script
#[derive(Debug)]
struct Line {
    number: usize,
    indent: usize,
    tokens: Vec<HostToken>,
}

/// Parse a host script into statements
pub fn parse_script(source: &str) -> ExecutorResult<Vec<HostStmt>> {
    let mut lines = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let number = i + 1;
        let tokens = tokenize_line(text, number)?;
        if tokens.is_empty() {
            continue;
        }
        let indent = text.chars().take_while(|c| *c == ' ' || *c == '\t').count();
        lines.push(Line {
            number,
            indent,
            tokens,
        });
    }

    let mut pos = 0;
    parse_block(&lines, &mut pos, 0)
}

fn syntax(
    line: usize,
    message: &str,
) -> ExecutorError {
    ExecutorError::Syntax {
        line,
        message: message.to_string(),
    }
}

/// Parse consecutive lines at exactly `indent`
fn parse_block(
    lines: &[Line],
    pos: &mut usize,
    indent: usize,
) -> ExecutorResult<Vec<HostStmt>> {
    let mut stmts = Vec::new();
    while let Some(line) = lines.get(*pos) {
        if line.indent < indent {
            break;
        }
        if line.indent > indent {
            return Err(syntax(line.number, "unexpected indent"));
        }
        *pos += 1;

        let mut cursor = Cursor::new(&line.tokens, line.number);
        let stmt = if cursor.at_name("for") {
            let (var, start, end) = cursor.parse_for_header()?;
            let body = match lines.get(*pos) {
                Some(next) if next.indent > indent => parse_block(lines, pos, next.indent)?,
                _ => return Err(syntax(line.number, "expected an indented block")),
            };
            HostStmt::For {
                var,
                start,
                end,
                body,
            }
        } else {
            cursor.parse_simple_stmt()?
        };
        stmts.push(stmt);
    }
    Ok(stmts)
}

/// Token cursor over one line
struct Cursor<'a> {
    tokens: &'a [HostToken],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(
        tokens: &'a [HostToken],
        line: usize,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            line,
        }
    }

    fn current(&self) -> Option<&'a HostToken> {
        self.tokens.get(self.pos)
    }

    fn at_name(
        &self,
        name: &str,
    ) -> bool {
        matches!(self.current(), Some(HostToken::Name(n)) if n == name)
    }

    fn error(
        &self,
        message: &str,
    ) -> ExecutorError {
        let found = match self.current() {
            Some(token) => format!("{:?}", token),
            None => "end of line".to_string(),
        };
        ExecutorError::Syntax {
            line: self.line,
            message: format!("{}, found {}", message, found),
        }
    }

    fn expect(
        &mut self,
        token: &HostToken,
        message: &str,
    ) -> ExecutorResult<()> {
        if self.current() == Some(token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn expect_name(
        &mut self,
        name: &str,
    ) -> ExecutorResult<()> {
        if self.at_name(name) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", name)))
        }
    }

    fn identifier(&mut self) -> ExecutorResult<String> {
        match self.current() {
            Some(HostToken::Name(name)) if !is_reserved(name) => {
                self.pos += 1;
                Ok(name.clone())
            }
            _ => Err(self.error("expected a name")),
        }
    }

    fn expect_end(&self) -> ExecutorResult<()> {
        match self.current() {
            None => Ok(()),
            Some(_) => Err(self.error("expected end of line")),
        }
    }

    /// `for NAME in range(e, e):`
    fn parse_for_header(&mut self) -> ExecutorResult<(String, HostExpr, HostExpr)> {
        self.expect_name("for")?;
        let var = self.identifier()?;
        self.expect_name("in")?;
        self.expect_name("range")?;
        self.expect(&HostToken::LParen, "expected '('")?;
        let start = self.parse_expr(BP_LOWEST)?;
        self.expect(&HostToken::Comma, "expected ','")?;
        let end = self.parse_expr(BP_LOWEST)?;
        self.expect(&HostToken::RParen, "expected ')'")?;
        self.expect(&HostToken::Colon, "expected ':'")?;
        self.expect_end()?;
        Ok((var, start, end))
    }

    /// `pass` or `NAME (=|+=|-=) e`
    fn parse_simple_stmt(&mut self) -> ExecutorResult<HostStmt> {
        if self.at_name("pass") {
            self.pos += 1;
            self.expect_end()?;
            return Ok(HostStmt::Pass);
        }

        let name = self.identifier()?;
        let op = match self.current() {
            Some(HostToken::Eq) => AssignOp::Set,
            Some(HostToken::PlusEq) => AssignOp::Add,
            Some(HostToken::MinusEq) => AssignOp::Sub,
            _ => return Err(self.error("expected an assignment")),
        };
        self.pos += 1;
        let value = self.parse_expr(BP_LOWEST)?;
        self.expect_end()?;
        Ok(HostStmt::Assign { name, op, value })
    }

    fn parse_expr(
        &mut self,
        min_bp: u8,
    ) -> ExecutorResult<HostExpr> {
        let mut left = self.parse_prefix()?;

        while let Some((op, bp)) = self.current().and_then(infix_info) {
            if bp <= min_bp {
                break;
            }
            self.pos += 1;
            let right = self.parse_expr(bp)?;
            left = HostExpr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> ExecutorResult<HostExpr> {
        let token = match self.current() {
            Some(token) => token,
            None => return Err(self.error("expected an expression")),
        };

        match token {
            HostToken::Int(n) => {
                self.pos += 1;
                Ok(HostExpr::Int(*n))
            }
            HostToken::Str(s) => {
                self.pos += 1;
                // Adjacent literals join into one
                let mut text = s.clone();
                while let Some(HostToken::Str(next)) = self.current() {
                    text.push_str(next);
                    self.pos += 1;
                }
                Ok(HostExpr::Str(text))
            }
            HostToken::Minus | HostToken::Plus => {
                let op = if *token == HostToken::Minus {
                    UnOp::Neg
                } else {
                    UnOp::Pos
                };
                self.pos += 1;
                let expr = self.parse_expr(BP_UNARY)?;
                Ok(HostExpr::Unary {
                    op,
                    expr: Box::new(expr),
                })
            }
            HostToken::LParen => {
                self.pos += 1;
                let expr = self.parse_expr(BP_LOWEST)?;
                self.expect(&HostToken::RParen, "expected ')'")?;
                Ok(expr)
            }
            HostToken::Name(name) if name == "None" => {
                self.pos += 1;
                Ok(HostExpr::None)
            }
            HostToken::Name(name) if !is_reserved(name) => {
                self.pos += 1;
                if self.current() == Some(&HostToken::LParen) {
                    self.pos += 1;
                    let args = self.parse_args()?;
                    Ok(HostExpr::Call {
                        func: name.clone(),
                        args,
                    })
                } else {
                    Ok(HostExpr::Name(name.clone()))
                }
            }
            _ => Err(self.error("expected an expression")),
        }
    }

    /// Call arguments after `(`
    fn parse_args(&mut self) -> ExecutorResult<Vec<HostExpr>> {
        let mut args = Vec::new();
        if self.current() == Some(&HostToken::RParen) {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr(BP_LOWEST)?);
            match self.current() {
                Some(HostToken::Comma) => self.pos += 1,
                Some(HostToken::RParen) => {
                    self.pos += 1;
                    return Ok(args);
                }
                _ => return Err(self.error("expected ',' or ')'")),
            }
        }
    }
}

fn infix_info(token: &HostToken) -> Option<(BinOp, u8)> {
    match token {
        HostToken::Plus => Some((BinOp::Add, BP_TERM)),
        HostToken::Minus => Some((BinOp::Sub, BP_TERM)),
        HostToken::Star => Some((BinOp::Mul, BP_FACTOR)),
        HostToken::Slash => Some((BinOp::Div, BP_FACTOR)),
        _ => None,
    }
}

/// Words the host script reserves
pub fn is_reserved(name: &str) -> bool {
    matches!(name, "for" | "in" | "pass" | "None")
}

/// Whether `name` lexes as a single host name token
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

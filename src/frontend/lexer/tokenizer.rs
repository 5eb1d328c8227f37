//! Tokenizer implementation
//! Scanner over raw text plus the CHAR-run post-processing pass

use std::collections::VecDeque;

use super::keywords::match_keyword;
use super::literals::segment_chars;
use super::tokens::*;

/// Comment marker, runs to the end of the line
const COMMENT_MARKER: char = '#';

/// Raw lexeme produced by the scanner.
///
/// `Char` never leaves this module: runs of chars are folded into integer and
/// identifier tokens by [`Lexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    Keyword(Keyword),
    String(&'a str),
    Char(char),
}

/// Scanner state over the remaining source text
#[derive(Debug, Clone)]
struct Scanner<'a> {
    rest: &'a str,
    /// The last lexeme was `“`
    after_open_quote: bool,
    /// A string literal was cut before `”`, which comes next
    pending_close_quote: bool,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            rest: source,
            after_open_quote: false,
            pending_close_quote: false,
        }
    }

    /// Skip whitespace and comments until neither is left
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let old_len = self.rest.len();
            self.rest = self.rest.trim_start();
            if self.rest.starts_with(COMMENT_MARKER) {
                let end = self.rest.find('\n').unwrap_or(self.rest.len());
                self.rest = &self.rest[end..];
            }
            if self.rest.len() == old_len {
                break;
            }
        }
    }

    fn next_lexeme(&mut self) -> Option<Lexeme<'a>> {
        if self.pending_close_quote {
            self.pending_close_quote = false;
            return Some(Lexeme::Keyword(Keyword::CloseQuote));
        }

        self.skip_whitespace_and_comments();
        if self.rest.is_empty() {
            return None;
        }

        if let Some(keyword) = match_keyword(self.rest) {
            self.rest = &self.rest[keyword.spelling().len()..];
            self.after_open_quote = keyword == Keyword::OpenQuote;
            return Some(Lexeme::Keyword(keyword));
        }

        if self.after_open_quote {
            self.after_open_quote = false;
            return Some(self.scan_string());
        }

        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(Lexeme::Char(c))
    }

    /// Scan string literal content up to `”`, verbatim
    fn scan_string(&mut self) -> Lexeme<'a> {
        let close = Keyword::CloseQuote.spelling();
        match self.rest.find(close) {
            Some(pos) => {
                let content = &self.rest[..pos];
                self.rest = &self.rest[pos + close.len()..];
                self.pending_close_quote = true;
                Lexeme::String(content)
            }
            None => {
                // Unterminated: the rest of the input is the literal
                let content = self.rest;
                self.rest = "";
                Lexeme::String(content)
            }
        }
    }
}

/// Main lexer structure
///
/// A lazy, finite token sequence. Restart by constructing a new lexer.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    chars: String,
    queue: VecDeque<Token>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            chars: String::new(),
            queue: VecDeque::new(),
            finished: false,
        }
    }

    /// Fold the buffered char run into tokens
    fn flush_chars(&mut self) -> Result<(), LexError> {
        if self.chars.is_empty() {
            return Ok(());
        }
        let tokens = segment_chars(&self.chars)?;
        self.chars.clear();
        self.queue.extend(tokens);
        Ok(())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }

            let lexeme = self.scanner.next_lexeme();
            let token = match lexeme {
                Some(Lexeme::Char(c)) => {
                    self.chars.push(c);
                    continue;
                }
                Some(Lexeme::Keyword(keyword)) => Some(Token::Keyword(keyword)),
                Some(Lexeme::String(s)) => Some(Token::StringLiteral(s.to_string())),
                None => {
                    self.finished = true;
                    None
                }
            };

            if let Err(err) = self.flush_chars() {
                self.finished = true;
                self.queue.clear();
                return Some(Err(err));
            }
            self.queue.extend(token);
        }
    }
}

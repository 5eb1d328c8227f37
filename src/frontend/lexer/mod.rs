//! Lexer module
//!
//! Split into the keyword table, literal segmentation and the tokenizer proper.

pub mod keywords;
pub mod literals;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

// Re-export types
pub use keywords::{keyword_from_str, KEYWORDS};
pub use tokenizer::Lexer;
pub use tokens::{Keyword, LexError, Token, TokenKind};

/// Tokenize source code
///
/// Collects the lazy [`Lexer`] sequence, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("lexing {} bytes", source.len());

    let mut tokens = Vec::new();
    for token in Lexer::new(source) {
        let token = token?;
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("lexing complete, {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    match token {
        Token::Keyword(k) => tracing::trace!("keyword {}", k),
        Token::Identifier(name) => tracing::trace!("identifier {}", name),
        Token::StringLiteral(s) => tracing::trace!("string {:?}", s),
        Token::IntegerLiteral(n) => tracing::trace!("integer {}", n),
    }
}

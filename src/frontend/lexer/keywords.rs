//! Keyword table and prefix matching

use super::tokens::Keyword;

/// Keywords in match order.
///
/// A keyword whose spelling starts with another keyword's spelling must come
/// first: `走走` before `走`, `退退` before `退`.
pub const KEYWORDS: [Keyword; 22] = [
    Keyword::Become,
    Keyword::Begin,
    Keyword::CloseQuote,
    Keyword::Colon,
    Keyword::Dec,
    Keyword::DecBy,
    Keyword::DivideBy,
    Keyword::End,
    Keyword::EndLoop,
    Keyword::From,
    Keyword::Inc,
    Keyword::IncBy,
    Keyword::IsVar,
    Keyword::Loop,
    Keyword::Minus,
    Keyword::OpenQuote,
    Keyword::Period,
    Keyword::Plus,
    Keyword::Say,
    Keyword::Step,
    Keyword::Times,
    Keyword::To,
];

/// Match a keyword at the start of `source`
pub fn match_keyword(source: &str) -> Option<Keyword> {
    KEYWORDS
        .iter()
        .copied()
        .find(|keyword| source.starts_with(keyword.spelling()))
}

/// Look up a keyword by its exact spelling
pub fn keyword_from_str(s: &str) -> Option<Keyword> {
    KEYWORDS.iter().copied().find(|keyword| keyword.spelling() == s)
}

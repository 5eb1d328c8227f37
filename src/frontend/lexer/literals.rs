//! Numeral and identifier segmentation of raw character runs

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::{LexError, Token};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").expect("valid regex"));

/// 中文数字. Only single characters are recognized: `十五` is `十` followed by
/// the identifier `五`.
const CHINESE_DIGITS: [(char, i64); 12] = [
    ('零', 0),
    ('一', 1),
    ('二', 2),
    ('两', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
];

/// Value of a single Chinese numeral character
pub fn chinese_digit(c: char) -> Option<i64> {
    CHINESE_DIGITS
        .iter()
        .find(|(digit, _)| *digit == c)
        .map(|(_, value)| *value)
}

/// Split a leading numeral off `chars`.
///
/// Returns the numeral value, if any, and the remaining text.
pub fn scan_integer(chars: &str) -> Result<(Option<i64>, &str), LexError> {
    if let Some(m) = DIGIT_RUN.find(chars) {
        let digits = m.as_str();
        let value = digits
            .parse::<i64>()
            .map_err(|_| LexError::IntegerOverflow {
                digits: digits.to_string(),
            })?;
        return Ok((Some(value), &chars[m.end()..]));
    }

    let mut it = chars.chars();
    if let Some(value) = it.next().and_then(chinese_digit) {
        return Ok((Some(value), it.as_str()));
    }

    Ok((None, chars))
}

/// Turn a run of raw characters into at most one integer and one identifier
pub fn segment_chars(chars: &str) -> Result<Vec<Token>, LexError> {
    let (integer, rest) = scan_integer(chars)?;
    let mut tokens = Vec::with_capacity(2);
    if let Some(value) = integer {
        tokens.push(Token::IntegerLiteral(value));
    }
    if !rest.is_empty() {
        tokens.push(Token::Identifier(rest.to_string()));
    }
    Ok(tokens)
}

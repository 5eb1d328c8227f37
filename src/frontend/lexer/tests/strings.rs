//! 字符串测试

use crate::frontend::lexer::{tokenize, Keyword, Token};

#[cfg(test)]
mod lexer_strings_tests {
    use super::*;

    #[test]
    fn test_string_literal() {
        assert_eq!(
            tokenize("“你好”").unwrap(),
            vec![
                Token::Keyword(Keyword::OpenQuote),
                Token::StringLiteral("你好".into()),
                Token::Keyword(Keyword::CloseQuote),
            ]
        );
    }

    #[test]
    fn test_string_content_is_verbatim() {
        assert_eq!(
            tokenize("“a # b 。 \\n”").unwrap()[1],
            Token::StringLiteral("a # b 。 \\n".into())
        );
    }

    #[test]
    fn test_leading_whitespace_in_string_is_stripped() {
        assert_eq!(
            tokenize("“  你好”").unwrap()[1],
            Token::StringLiteral("你好".into())
        );
    }

    #[test]
    fn test_string_starting_with_keyword_is_split() {
        // Keywords are matched before string mode kicks in
        assert_eq!(
            tokenize("“加油”").unwrap(),
            vec![
                Token::Keyword(Keyword::OpenQuote),
                Token::Keyword(Keyword::Plus),
                Token::Identifier("油".into()),
                Token::Keyword(Keyword::CloseQuote),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_takes_rest() {
        assert_eq!(
            tokenize("“没完。").unwrap(),
            vec![
                Token::Keyword(Keyword::OpenQuote),
                Token::StringLiteral("没完。".into()),
            ]
        );
    }

    #[test]
    fn test_tokens_after_string() {
        assert_eq!(
            tokenize("唠唠：“嗨”。").unwrap(),
            vec![
                Token::Keyword(Keyword::Say),
                Token::Keyword(Keyword::Colon),
                Token::Keyword(Keyword::OpenQuote),
                Token::StringLiteral("嗨".into()),
                Token::Keyword(Keyword::CloseQuote),
                Token::Keyword(Keyword::Period),
            ]
        );
    }
}

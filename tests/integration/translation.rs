//! Host script generation tests

use dongbei::frontend::lexer::{tokenize, Keyword, Token};
use dongbei::{translate, Compiler};

#[test]
fn test_header_only_for_empty_program() {
    assert_eq!(translate("").unwrap(), "_db_output = \"\"");
}

#[test]
fn test_all_statement_forms() {
    let source = "老王是活雷锋。老王装1。老王走走。老王走2步。老王退退。老王退3步。唠唠：老王。";
    let expected = [
        "_db_output = \"\"",
        "_db_var0 = None",
        "_db_var0 = 1",
        "_db_var0 += 1",
        "_db_var0 += 2",
        "_db_var0 -= 1",
        "_db_var0 -= 3",
        "_db_output += str(_db_var0) + \"\\n\"",
    ]
    .join("\n");
    assert_eq!(translate(source).unwrap(), expected);
}

#[test]
fn test_loop_translation() {
    let source = "我从1到三磨叽：唠唠：我。磨叽完了。";
    let expected = [
        "_db_output = \"\"",
        "for _db_var0 in range(1, 3 + 1):",
        "  _db_output += str(_db_var0) + \"\\n\"",
    ]
    .join("\n");
    assert_eq!(translate(source).unwrap(), expected);
}

#[test]
fn test_operators_are_concatenated() {
    let code = translate("甲装1加2减3乘4除以5。").unwrap();
    assert!(code.ends_with("_db_var0 = 1+2-3*4/5"));
}

#[test]
fn test_distinct_identifiers_get_distinct_names() {
    let code = translate("甲装1。乙装甲。甲装乙。").unwrap();
    assert!(code.contains("_db_var0 = 1"));
    assert!(code.contains("_db_var1 = _db_var0"));
    assert!(code.contains("_db_var0 = _db_var1"));
}

#[test]
fn test_compile_exposes_stages() {
    let translation = Compiler::new().compile("唠唠：“嗨”。").unwrap();
    assert_eq!(
        translation.tokens,
        vec![
            Token::Keyword(Keyword::Say),
            Token::Keyword(Keyword::Colon),
            Token::Keyword(Keyword::OpenQuote),
            Token::StringLiteral("嗨".into()),
            Token::Keyword(Keyword::CloseQuote),
            Token::Keyword(Keyword::Period),
        ]
    );
    assert!(translation.symbols.is_empty());
}

#[test]
fn test_every_keyword_tokenizes_alone() {
    for keyword in dongbei::frontend::lexer::KEYWORDS {
        assert_eq!(
            tokenize(keyword.spelling()).unwrap(),
            vec![Token::Keyword(keyword)],
            "keyword {:?}",
            keyword
        );
    }
}

#[test]
fn test_tokens_serialize_to_json() {
    let tokens = tokenize("唠唠：1。").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[2]["kind"], "IntegerLiteral");
    assert_eq!(json[2]["value"], 1);
}

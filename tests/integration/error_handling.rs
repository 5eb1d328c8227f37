//! Error handling integration tests
//!
//! Every failure is fatal and reported with a stable kind.

use dongbei::backends::ExecutorError;
use dongbei::frontend::parser::ParseError;
use dongbei::{run, run_file, Error, ErrorKind};

fn kind_of(source: &str) -> ErrorKind {
    run(source).expect_err("expected failure").kind()
}

#[test]
fn test_missing_terminator() {
    assert_eq!(kind_of("唠唠：“你好”"), ErrorKind::UnexpectedToken);
}

#[test]
fn test_missing_terminator_is_unexpected_end() {
    match run("老王是活雷锋") {
        Err(Error::Parse(ParseError::UnexpectedEnd { .. })) => {}
        other => panic!("Expected unexpected end, got {:?}", other),
    }
}

#[test]
fn test_wrong_terminator() {
    match run("老王是活雷锋：") {
        Err(Error::Parse(ParseError::UnexpectedToken { position, .. })) => {
            assert_eq!(position, 2)
        }
        other => panic!("Expected unexpected token, got {:?}", other),
    }
}

#[test]
fn test_loop_without_variable() {
    assert_eq!(
        kind_of("从 一 到 三 磨叽：唠唠：我。磨叽完了。"),
        ErrorKind::UnexpectedToken
    );
}

#[test]
fn test_unclosed_loop() {
    assert_eq!(kind_of("我从1到3磨叽：唠唠：我。"), ErrorKind::UnexpectedToken);
}

#[test]
fn test_begin_and_end_markers_are_not_statements() {
    assert_eq!(
        kind_of("开整了：唠唠：1。整完了。"),
        ErrorKind::UnexpectedToken
    );
    assert_eq!(kind_of("唠唠：1。整完了。"), ErrorKind::UnexpectedToken);
}

#[test]
fn test_identifier_alone_is_leftover() {
    assert_eq!(kind_of("唠唠：1。老王"), ErrorKind::UnexpectedToken);
}

#[test]
fn test_empty_say_is_rejected_by_host() {
    match run("唠唠：。") {
        Err(Error::Execute(ExecutorError::Type(_))) => {}
        other => panic!("Expected host type error, got {:?}", other),
    }
    assert_eq!(kind_of("唠唠：1。唠唠：。"), ErrorKind::Execution);
}

#[test]
fn test_empty_assignment_is_rejected_by_host() {
    match run("老王装。") {
        Err(Error::Execute(ExecutorError::Syntax { line: 2, .. })) => {}
        other => panic!("Expected host syntax error, got {:?}", other),
    }
}

#[test]
fn test_dangling_operator_is_rejected_by_host() {
    assert_eq!(kind_of("唠唠：1加。"), ErrorKind::Execution);
}

#[test]
fn test_literal_just_past_host_range_overflows_in_lexer() {
    assert_eq!(
        kind_of("唠唠：9223372036854775808。"),
        ErrorKind::IntegerOverflow
    );
    assert_eq!(run("唠唠：9223372036854775807。").unwrap(), "9223372036854775807\n");
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        kind_of("唠唠：99999999999999999999999。"),
        ErrorKind::IntegerOverflow
    );
}

#[test]
fn test_undefined_variable() {
    match run("唠唠：老王。") {
        Err(Error::Execute(ExecutorError::UndefinedName(name))) => {
            assert_eq!(name, "_db_var0")
        }
        other => panic!("Expected undefined name, got {:?}", other),
    }
}

#[test]
fn test_type_error() {
    assert_eq!(kind_of("唠唠：“岁数”加1。"), ErrorKind::Execution);
}

#[test]
fn test_division_by_zero() {
    match run("唠唠：1除以0。") {
        Err(Error::Execute(ExecutorError::DivisionByZero)) => {}
        other => panic!("Expected division by zero, got {:?}", other),
    }
}

#[test]
fn test_no_partial_output_on_failure() {
    // The first say ran, but a failed run returns nothing
    assert!(run("唠唠：1。唠唠：老王。").is_err());
}

#[test]
fn test_missing_file() {
    let err = run_file(std::path::Path::new("does/not/exist.dongbei")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("exist.dongbei"));
}

//! End-to-end execution tests
//!
//! Source in, said text out.

use dongbei::run;

#[test]
fn test_say_string() {
    assert_eq!(run("唠唠：“你好”。").unwrap(), "你好\n");
}

#[test]
fn test_declare_assign_increment() {
    let source = "老张是活雷锋。老张装5。老张走走。唠唠：老张。";
    assert_eq!(run(source).unwrap(), "6\n");
}

#[test]
fn test_loop_with_chinese_bounds() {
    let source = "我 从 一 到 三 磨叽：唠唠：我。磨叽完了。";
    assert_eq!(run(source).unwrap(), "1\n2\n3\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(run("").unwrap(), "");
    assert_eq!(run("  # 啥也没有\n").unwrap(), "");
}

#[test]
fn test_declared_var_says_none() {
    assert_eq!(run("老王是活雷锋。唠唠：老王。").unwrap(), "None\n");
}

#[test]
fn test_decrement() {
    let source = "老王装10。老王退退。老王退3步。唠唠：老王。";
    assert_eq!(run(source).unwrap(), "6\n");
}

#[test]
fn test_increment_by_expression() {
    let source = "老王装1。老李装2。老王走老李加3步。唠唠：老王。";
    assert_eq!(run(source).unwrap(), "6\n");
}

#[test]
fn test_host_precedence() {
    // 1 + 2 * 3, grouped by the host evaluator
    assert_eq!(run("唠唠：1加2乘3。").unwrap(), "7\n");
    assert_eq!(run("唠唠：9减4除以2。").unwrap(), "7\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run("唠唠：“你好”加“世界”。").unwrap(), "你好世界\n");
}

#[test]
fn test_says_in_execution_order() {
    let source = "
唠唠：“开始”。
我从1到2磨叽：
  唠唠：我。
  唠唠：“中”。
磨叽完了。
唠唠：“完”。
";
    assert_eq!(run(source).unwrap(), "开始\n1\n中\n2\n中\n完\n");
}

#[test]
fn test_reversed_bounds_run_zero_times() {
    let source = "我从5到3磨叽：唠唠：我。磨叽完了。唠唠：“完”。";
    assert_eq!(run(source).unwrap(), "完\n");
}

#[test]
fn test_equal_bounds_run_once() {
    assert_eq!(run("我从3到3磨叽：唠唠：我。磨叽完了。").unwrap(), "3\n");
}

#[test]
fn test_empty_loop_body() {
    let source = "我从1到3磨叽：磨叽完了。唠唠：我。";
    assert_eq!(run(source).unwrap(), "3\n");
}

#[test]
fn test_nested_loops_accumulate() {
    let source = "
和装0。
我从1到3磨叽：
  他从1到3磨叽：
    和走我乘他步。
  磨叽完了。
磨叽完了。
唠唠：和。
";
    assert_eq!(run(source).unwrap(), "36\n");
}

#[test]
fn test_loop_bound_expressions() {
    let source = "老王装2。我从老王到老王乘2磨叽：唠唠：我。磨叽完了。";
    assert_eq!(run(source).unwrap(), "2\n3\n4\n");
}

#[test]
fn test_comments_are_ignored() {
    let source = "# 打招呼\n唠唠：“嗨”。 # 说完了\n";
    assert_eq!(run(source).unwrap(), "嗨\n");
}

#[test]
fn test_string_with_quote_characters() {
    assert_eq!(run("唠唠：“他说\"嗨\"”。").unwrap(), "他说\"嗨\"\n");
}

#[test]
fn test_each_run_starts_fresh() {
    assert_eq!(run("老王装1。唠唠：老王。").unwrap(), "1\n");
    assert_eq!(run("老李装2。唠唠：老李。").unwrap(), "2\n");
}

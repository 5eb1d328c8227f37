//! Property tests using proptest

use dongbei::frontend::lexer::{tokenize, Token};
use dongbei::middle::codegen::SymbolTable;
use dongbei::run;
use proptest::prelude::*;

/// Identifiers made of characters that are neither keywords nor numerals
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[甲乙丙丁戊己庚辛]{1,4}"
}

proptest! {
    #[test]
    fn digit_runs_are_one_integer(n in 0i64..=i64::MAX) {
        let tokens = tokenize(&n.to_string()).unwrap();
        prop_assert_eq!(tokens, vec![Token::IntegerLiteral(n)]);
    }

    #[test]
    fn resolution_is_stable(names in prop::collection::vec(identifier_strategy(), 1..20)) {
        let mut table = SymbolTable::new();
        let first: Vec<String> = names.iter().map(|n| table.resolve(n).to_string()).collect();
        let second: Vec<String> = names.iter().map(|n| table.resolve(n).to_string()).collect();
        prop_assert_eq!(&first, &second);

        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                prop_assert_eq!(a == b, first[i] == first[j]);
            }
        }
    }

    #[test]
    fn loop_runs_once_per_value(from in -5i64..20, to in -5i64..20) {
        // Negative bounds are written as 0 minus the magnitude
        let bound = |v: i64| if v < 0 { format!("0减{}", -v) } else { v.to_string() };
        let source = format!("我从{}到{}磨叽：唠唠：我。磨叽完了。", bound(from), bound(to));
        let expected: String = (from..=to).map(|i| format!("{}\n", i)).collect();
        prop_assert_eq!(run(&source).unwrap(), expected);
    }

    #[test]
    fn says_keep_order(values in prop::collection::vec(0u32..1000, 0..10)) {
        let source: String = values.iter().map(|v| format!("唠唠：{}。", v)).collect();
        let expected: String = values.iter().map(|v| format!("{}\n", v)).collect();
        prop_assert_eq!(run(&source).unwrap(), expected);
    }
}

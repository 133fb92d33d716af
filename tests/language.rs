use calculon::{ErrorKind, calculate};

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!(value == expected,
                             "Expression {src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: ErrorKind) {
    match calculate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e, expected, "Expression {src:?} failed with the wrong kind"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("3 + 5", 8.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
}

#[test]
fn decimals() {
    assert_value("1.5 + 2.25", 3.75);
    assert_value(".5 * 4", 2.0);
    assert_value("5. / 2", 2.5);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) - 5", 9.0);
    assert_value("10 - 6 / 2", 7.0);
    assert_value("((((7))))", 7.0);
    assert_value("(1 + 2) * (3 + 4) / (5 - 4)", 21.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 * 3 / 4", 1.5);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("3+5", 8.0);
    assert_value("  3 \t+\n 5  ", 8.0);
    assert_value("(2+3)*4", 20.0);
}

#[test]
fn unary_minus_at_start() {
    assert_value("-3 + 4", 1.0);
    assert_value("-3", -3.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("-2 * 3", -6.0);
}

#[test]
fn unary_minus_after_operator_or_paren() {
    assert_value("3 * -2", -6.0);
    assert_value("2 - -3", 5.0);
    assert_value("10 / -4", -2.5);
    assert_value("(-1 + 3) * 2", 4.0);
    assert_value("- -3", 3.0);
}

#[test]
fn division_by_zero() {
    assert_failure("10 / 0", ErrorKind::DivisionByZero);
    assert_failure("0 / 0", ErrorKind::DivisionByZero);
    assert_failure("1 / 0.0", ErrorKind::DivisionByZero);
    assert_failure("1 / (2 - 2)", ErrorKind::DivisionByZero);
    assert_failure("1 / -0", ErrorKind::DivisionByZero);
    assert_failure("1 + 2 / 0 * 3", ErrorKind::DivisionByZero);
}

#[test]
fn mismatched_parentheses() {
    assert_failure("(2 + 3", ErrorKind::MismatchedParentheses);
    assert_failure("2 + 3)", ErrorKind::MismatchedParentheses);
    assert_failure(")(", ErrorKind::MismatchedParentheses);
    assert_failure("((1)", ErrorKind::MismatchedParentheses);
    assert_failure("(2 +", ErrorKind::MismatchedParentheses);
}

#[test]
fn invalid_expressions() {
    assert_failure("2 + +", ErrorKind::InvalidExpression);
    assert_failure("2 + ", ErrorKind::InvalidExpression);
    assert_failure("+ 2", ErrorKind::InvalidExpression);
    assert_failure("2 + + 3", ErrorKind::InvalidExpression);
    assert_failure("2 * / 3", ErrorKind::InvalidExpression);
    assert_failure("", ErrorKind::InvalidExpression);
    assert_failure("   ", ErrorKind::InvalidExpression);
    assert_failure("()", ErrorKind::InvalidExpression);
    assert_failure("2 3", ErrorKind::InvalidExpression);
    assert_failure("2 (3)", ErrorKind::InvalidExpression);
    assert_failure("(1 2)", ErrorKind::InvalidExpression);
    assert_failure("-", ErrorKind::InvalidExpression);
}

#[test]
fn invalid_characters() {
    assert_failure("2 # 3", ErrorKind::InvalidCharacter);
    assert_failure("2 ^ 3", ErrorKind::InvalidCharacter);
    assert_failure("x + 1", ErrorKind::InvalidCharacter);
    assert_failure("1 + 2 = 3", ErrorKind::InvalidCharacter);
    assert_failure("4 × 2", ErrorKind::InvalidCharacter);
}

#[test]
fn invalid_numbers() {
    assert_failure("1.2.3 + 4", ErrorKind::InvalidNumber);
    assert_failure(". + 1", ErrorKind::InvalidNumber);
    assert_failure("3x + 1", ErrorKind::InvalidNumber);
    assert_failure("12abc", ErrorKind::InvalidNumber);
}

#[test]
fn tokenizer_errors_win_over_grammar_errors() {
    assert_failure("(2 # 3", ErrorKind::InvalidCharacter);
    assert_failure("+ + 1.2.3", ErrorKind::InvalidNumber);
}

#[test]
fn parenthesis_errors_win_over_division_by_zero() {
    assert_failure("(1 / 0", ErrorKind::MismatchedParentheses);
}

#[test]
fn nesting_is_bounded() {
    let depth = 200;
    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&nested, 1.0);

    let depth = 1000;
    let too_deep = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_failure(&too_deep, ErrorKind::InvalidExpression);
}

/// Runs `f` on a thread with a small stack, so unbounded recursion fails the
/// test instead of passing on a large main-thread stack.
fn on_small_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new().stack_size(256 * 1024)
                               .spawn(f)
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn long_addition_chain() {
    let src = format!("{}1", "1 + ".repeat(100_000));
    assert_eq!(on_small_stack(move || calculate(&src)), Ok(100_001.0));
}

#[test]
fn long_multiplication_chain() {
    let src = format!("{}3", "1 * ".repeat(100_000));
    assert_eq!(on_small_stack(move || calculate(&src)), Ok(3.0));
}

#[test]
fn long_chain_of_products() {
    let product = format!("{}2", "1 * ".repeat(1_000));
    let src = vec![product; 100].join(" - ");
    assert_eq!(on_small_stack(move || calculate(&src)), Ok(-196.0));
}

#[test]
fn long_chain_inside_parentheses() {
    let src = format!("2 * ({}1) / 2", "1 - ".repeat(50_000));
    assert_eq!(on_small_stack(move || calculate(&src)), Ok(-49_999.0));
}

#[test]
fn division_by_zero_deep_in_a_chain() {
    let src = format!("{}1 / 0 + 1", "1 + ".repeat(50_000));
    assert_eq!(on_small_stack(move || calculate(&src)), Err(ErrorKind::DivisionByZero));
}

#[test]
fn oversized_literals_are_invalid_numbers() {
    assert_failure(&"9".repeat(400), ErrorKind::InvalidNumber);
    assert_failure(&format!("1 + {}", "9".repeat(400)), ErrorKind::InvalidNumber);
}

#[test]
fn overflowing_arithmetic_follows_ieee() {
    let big = format!("1{}", "0".repeat(308));
    assert_eq!(calculate(&format!("{big} * 10")), Ok(f64::INFINITY));
}

#[test]
fn repeated_calls_agree() {
    for src in ["2 * (3 + 4) - 5", "10 / 0", "(2 + 3", "1.2.3"] {
        assert_eq!(calculate(src), calculate(src));
    }
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let src = format!("{i} * (2 + 3)");
                                        calculate(&src)
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = f64::from(u8::try_from(i).unwrap()) * 5.0;
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}

use prefixa::{evaluate_expression, interpreter::evaluator::Overflow, EvalError, Evaluation};

fn eval(src: &str) -> (Result<i8, EvalError>, Vec<Overflow>) {
    let mut notices = Vec::new();
    let evaluation = evaluate_expression(src, |notice| notices.push(notice));
    (evaluation.result, notices)
}

fn assert_result(src: &str, expected: i8) {
    let (result, notices) = eval(src);
    assert_eq!(result, Ok(expected), "wrong result for {src:?}");
    assert!(notices.is_empty(),
            "unexpected overflow notices for {src:?}: {notices:?}");
}

fn assert_error(src: &str, expected: EvalError) {
    let (result, notices) = eval(src);
    assert_eq!(result, Err(expected), "expected an error for {src:?}");
    assert!(notices.is_empty(),
            "unexpected overflow notices for {src:?}: {notices:?}");
}

fn assert_prefix(src: &str, expected: &str) {
    let evaluation = evaluate_expression(src, |_| {});
    assert_eq!(evaluation.prefix_notation(), expected, "wrong prefix for {src:?}");
}

#[test]
fn literals_up_to_127_evaluate_to_themselves() {
    assert_result("0", 0);
    assert_result("1", 1);
    assert_result("42", 42);
    assert_result("127", 127);
}

#[test]
fn literals_above_127_are_reinterpreted_as_bytes() {
    assert_result("128", -128);
    assert_result("200", -56);
    assert_result("255", -1);
}

#[test]
fn basic_arithmetic() {
    assert_result("5-3", 2);
    assert_result("2+3", 5);
    assert_result("7*9", 63);
    assert_result("10/2", 5);
    assert_result("2+3*4", 14);
    assert_result("2*(3+4)", 14);
}

#[test]
fn parenthesized_grouping_is_respected() {
    assert_prefix("(2+3)*4", "* + 2 3 4");
    assert_result("(2+3)*4", 20);
}

#[test]
fn subtraction_below_zero_stays_exact() {
    assert_result("3-5", -2);
}

#[test]
fn prefix_notation_output() {
    assert_prefix("5-3", "- 5 3");
    assert_prefix("-5+3", "+ ^ 5 3");
    assert_prefix("2+3*4", "+ 2 * 3 4");
}

#[test]
fn leading_minus_is_unary() {
    let (result, notices) = eval("-5+3");
    assert_eq!(result, Ok(-2));
    // -5 is hosted as the byte 251, so the addition wraps and signals.
    assert_eq!(notices, vec![Overflow::Wrapped]);
}

#[test]
fn chained_unary_minuses_each_negate() {
    assert_result("--5", 5);
}

#[test]
fn unary_minus_after_operator_and_paren() {
    let (result, notices) = eval("2*(-3)");
    assert_eq!(result, Ok(-6));
    assert_eq!(notices, vec![Overflow::Wrapped]);
}

#[test]
fn same_precedence_chains_keep_the_reverse_scan_grouping() {
    // Equal precedence is never popped, so 8-3-2 converts to "- - 8 3 2"
    // and groups as (8-3)-2.
    assert_prefix("8-3-2", "- - 8 3 2");
    assert_result("8-3-2", 3);
    assert_result("(8-3)-2", 3);
    assert_result("8-(3-2)", 7);
}

#[test]
fn multiplication_overflow_wraps_and_signals() {
    let (result, notices) = eval("4*32");
    assert_eq!(result, Ok(-128));
    assert_eq!(notices, vec![Overflow::Wrapped]);
}

#[test]
fn product_wrapping_to_zero_signals_twice() {
    let (result, notices) = eval("16*16");
    assert_eq!(result, Ok(0));
    assert_eq!(notices, vec![Overflow::ZeroProduct, Overflow::Wrapped]);
}

#[test]
fn division_floors_toward_negative_infinity() {
    assert_result("7/2", 3);
    assert_result("9/3", 3);
    // 200 is the byte -56; the quotient rounds down, not toward zero.
    assert_result("200/3", -19);
    // 200 as a divisor is -56.
    assert_result("100/200", -2);
}

#[test]
fn division_by_zero_fails_before_anything_else() {
    assert_error("7/0", EvalError::DivisionByZero);
    assert_error("1+7/0", EvalError::DivisionByZero);
}

#[test]
fn missing_operands_are_reported() {
    assert_error("-", EvalError::NotEnoughOperands);
    assert_error("5+", EvalError::NotEnoughOperandsForOperation);
    assert_error("*", EvalError::NotEnoughOperandsForOperation);
}

#[test]
fn empty_input_is_invalid() {
    assert_error("", EvalError::InvalidExpression);
    assert_error("()", EvalError::InvalidExpression);
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_result("  5 - 3  ", 2);
    assert_result("1a + 2", 3);
}

#[test]
fn marker_character_in_input_is_not_an_operator() {
    // `^` is outside the input alphabet and is dropped, leaving the two
    // literals; the one pushed last in the reverse read is the answer.
    assert_result("5^3", 5);
}

#[test]
fn error_strings_are_exact() {
    assert_eq!(EvalError::NotEnoughOperands.to_string(),
               "Error: Not enough operands");
    assert_eq!(EvalError::NotEnoughOperandsForOperation.to_string(),
               "Error: Not enough operands for operation");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Div by 0");
    assert_eq!(EvalError::InvalidExpression.to_string(),
               "Error: Invalid expression");
    assert_eq!(Overflow::Wrapped.to_string(), "Overflow occurs!");
    assert_eq!(Overflow::ZeroProduct.to_string(), "Overflow occurs!");
}

#[test]
fn evaluation_is_stateless_and_repeatable() {
    let first: Evaluation = evaluate_expression("-5+3*(200/7)", |_| {});
    let second: Evaluation = evaluate_expression("-5+3*(200/7)", |_| {});
    assert_eq!(first, second);
    assert_eq!(first.prefix_notation(), second.prefix_notation());
}

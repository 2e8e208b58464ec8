use std::collections::HashMap;

use rpnexpr::{CompileError, EvalError, compile};

fn eval(src: &str) -> f64 {
    compile(src).unwrap_or_else(|e| panic!("{src:?} failed to compile: {e}"))
                .evaluate_constant()
                .unwrap_or_else(|e| panic!("{src:?} failed to evaluate: {e}"))
}

fn eval_with(src: &str, vars: &[(&str, f64)]) -> f64 {
    let bindings = vars.iter()
                       .map(|(name, value)| ((*name).to_string(), *value))
                       .collect::<HashMap<_, _>>();
    compile(src).unwrap_or_else(|e| panic!("{src:?} failed to compile: {e}"))
                .evaluate(&bindings)
                .unwrap_or_else(|e| panic!("{src:?} failed to evaluate: {e}"))
}

fn compile_error(src: &str) -> CompileError {
    match compile(src) {
        Ok(expr) => panic!("{src:?} compiled to `{}` but was expected to fail",
                           expr.program()),
        Err(e) => e,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}");
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2"), 3.0);
    assert_eq!(eval("7 * 9"), 63.0);
    assert_eq!(eval("8 - 5"), 3.0);
    assert_eq!(eval("10 / 4"), 2.5);
    assert_eq!(eval("10 % 4"), 2.0);
    assert_eq!(eval("0.5 + .25"), 0.75);
}

#[test]
fn precedence() {
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval("20 - 6 % 4"), 18.0);
}

#[test]
fn left_associativity() {
    let chained = eval("8 / 4 / 2");
    assert_eq!(chained, eval("(8 / 4) / 2"));
    assert_eq!(chained, 1.0);
    assert_eq!(eval("8 / (4 / 2)"), 4.0);
    assert_ne!(eval("8 / (4 / 2)"), chained);

    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("10 - (4 - 3)"), 9.0);
    assert_eq!(eval("100 % 7 % 3"), 2.0);
}

#[test]
fn operand_order_is_conventional() {
    assert_eq!(eval("8 - 3"), 5.0);
    assert_eq!(eval("3 / 4"), 0.75);
    assert_eq!(eval("7 % 4"), 3.0);
    assert_close(eval("Atan(1, 0)"), std::f64::consts::FRAC_PI_2);
    assert_close(eval("Atan(0, -1)"), std::f64::consts::PI);
}

#[test]
fn signs() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("+5"), 5.0);
    assert_eq!(eval("-2 * 3"), -6.0);
    assert_eq!(eval("-2 + 3"), 1.0);
    assert_eq!(eval("4 * (-2)"), -8.0);
    assert_eq!(eval("-(1 + 2) * 2"), -6.0);
    assert_close(eval("Atan(-1, -1)"), -3.0 * std::f64::consts::FRAC_PI_4);
}

#[test]
fn signs_keep_the_sign_of_zero() {
    assert_eq!(eval("-0").to_bits(), (-0.0_f64).to_bits());
    assert_eq!(eval("+0").to_bits(), 0.0_f64.to_bits());
    assert_eq!(eval("1 / (-0)"), f64::NEG_INFINITY);
    assert_eq!(eval("1 / (+0)"), f64::INFINITY);
    assert_eq!(eval_with("-x", &[("x", -0.0)]).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("Sqrt(16)"), 4.0);
    assert_eq!(eval("Abs(-5)"), 5.0);
    assert_eq!(eval("Sin(0)"), 0.0);
    assert_eq!(eval("Cos(0)"), 1.0);
    assert_eq!(eval("Tan(0)"), 0.0);
    assert_close(eval("Asin(1)"), std::f64::consts::FRAC_PI_2);
    assert_eq!(eval("Acos(1)"), 0.0);
    assert_eq!(eval("Sqrt(Abs(-3 * 3)) + 1"), 4.0);
    assert_eq!(eval("Abs(Atan(0, 1))"), 0.0);
}

#[test]
fn function_arguments_may_be_expressions() {
    assert_close(eval("Atan(2 * 1 - 1, 3 - 2)"), std::f64::consts::FRAC_PI_4);
    assert_eq!(eval("2 * Sqrt(9 + 16) / 5"), 2.0);
}

#[test]
fn variables_and_constants() {
    assert_close(eval_with("x + pi", &[("x", 1.0)]), 1.0 + std::f64::consts::PI);
    assert_close(eval("e"), std::f64::consts::E);
    assert_eq!(eval_with("pi", &[("pi", 3.0)]), 3.0);
    assert_eq!(eval_with("radius * 2", &[("radius", 1.5)]), 3.0);
    assert_eq!(eval_with("x_y + 1", &[("x_y", 1.0)]), 2.0);
}

#[test]
fn variable_names_are_case_sensitive() {
    let expr = compile("pI").unwrap();
    assert_eq!(expr.evaluate_constant(),
               Err(EvalError::MissingVariable { name: "pI".to_string() }));
}

#[test]
fn missing_variable_is_error() {
    let err = compile("x").unwrap().evaluate_constant().unwrap_err();
    assert_eq!(err, EvalError::MissingVariable { name: "x".to_string() });
}

#[test]
fn zero_divisors_follow_ieee() {
    assert!(eval("1 / 0").is_infinite());
    assert!(eval("-1 / 0").is_sign_negative());
    assert!(eval("0 / 0").is_nan());
    assert!(eval("5 % 0").is_nan());
}

#[test]
fn multiline_source() {
    assert_eq!(eval("1 +\n2 *\n\t3"), 7.0);
}

#[test]
fn source_text_round_trips() {
    for src in ["2 + 3 * 4", "  Sqrt( x )\n", "(1)", "Atan(y,x)"] {
        assert_eq!(compile(src).unwrap().source_text(), src);
    }
}

#[test]
fn evaluation_is_repeatable() {
    let expr = compile("Sin(x) * Cos(x) + x % 3").unwrap();
    let bindings = HashMap::from([("x".to_string(), 1.234)]);
    let first = expr.evaluate(&bindings).unwrap();
    for _ in 0..10 {
        assert_eq!(expr.evaluate(&bindings).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn empty_parentheses_is_error() {
    assert!(matches!(compile_error("()"), CompileError::EmptyParentheses { .. }));
    assert!(matches!(compile_error("1 + ()"), CompileError::EmptyParentheses { .. }));
}

#[test]
fn dangling_operator_is_error() {
    assert!(matches!(compile_error("(1 + )"), CompileError::AdjacentOperators { .. }));
    assert!(matches!(compile_error("1 +"), CompileError::AdjacentOperators { .. }));
    assert!(matches!(compile_error("Atan(1 -, 2)"), CompileError::AdjacentOperators { .. }));
}

#[test]
fn missing_left_operand_is_error() {
    assert!(matches!(compile_error("* 2"), CompileError::MissingOperand { .. }));
    assert!(matches!(compile_error("(/ 2)"), CompileError::MissingOperand { .. }));
    assert!(matches!(compile_error("Atan(1, )"), CompileError::MissingOperand { .. }));
}

#[test]
fn adjacent_operators_is_error() {
    assert!(matches!(compile_error("1 + + 2"), CompileError::AdjacentOperators { .. }));
    assert!(matches!(compile_error("1 * -2"), CompileError::AdjacentOperators { .. }));
}

#[test]
fn unbalanced_parentheses_is_error() {
    assert!(matches!(compile_error("((1 + 2)"), CompileError::UnbalancedParentheses { .. }));
    assert!(matches!(compile_error("(1 + 2))"), CompileError::UnbalancedParentheses { .. }));
    assert!(matches!(compile_error(")1 + 2("), CompileError::UnbalancedParentheses { .. }));
}

#[test]
fn unknown_function_is_error() {
    assert_eq!(compile_error("Foo(1)"),
               CompileError::UnknownFunction { name:     "Foo".to_string(),
                                               position: rpnexpr::compiler::lexer::SourcePosition::START, });
    assert!(matches!(compile_error("SQRT(4)"), CompileError::UnknownFunction { .. }));
}

#[test]
fn lowercase_function_name_is_a_variable() {
    assert!(matches!(compile_error("sqrt(4)"), CompileError::MissingOperator { .. }));
}

#[test]
fn wrong_function_arity_is_error() {
    assert!(matches!(compile_error("Atan(1)"),
                     CompileError::ArgumentCount { expected: 2, found: 1, .. }));
    assert!(matches!(compile_error("Sin(1, 2)"),
                     CompileError::ArgumentCount { expected: 1, found: 2, .. }));
}

#[test]
fn misplaced_comma_is_error() {
    assert!(matches!(compile_error("1, 2"), CompileError::MisplacedComma { .. }));
    assert!(matches!(compile_error("Sqrt((1, 2))"), CompileError::MisplacedComma { .. }));
}

#[test]
fn function_without_call_is_error() {
    assert!(matches!(compile_error("Sqrt 4"), CompileError::ExpectedCallParenthesis { .. }));
    assert!(matches!(compile_error("1 + Abs"), CompileError::ExpectedCallParenthesis { .. }));
}

#[test]
fn juxtaposed_operands_is_error() {
    assert!(matches!(compile_error("2 3"), CompileError::MissingOperator { .. }));
    assert!(matches!(compile_error("2 (3)"), CompileError::MissingOperator { .. }));
    assert!(matches!(compile_error("(2) x"), CompileError::MissingOperator { .. }));
}

#[test]
fn bad_numeric_literal_is_error() {
    assert_eq!(compile_error("1.2.3 + 1"),
               CompileError::NumericLiteral { literal:  "1.2.3".to_string(),
                                              position: rpnexpr::compiler::lexer::SourcePosition::START, });
    assert!(matches!(compile_error("."), CompileError::NumericLiteral { .. }));
}

#[test]
fn empty_source_is_error() {
    assert_eq!(compile_error(""), CompileError::EmptyExpression);
    assert_eq!(compile_error(" \n\t "), CompileError::EmptyExpression);
}

#[test]
fn parse_via_from_str() {
    let expr: rpnexpr::CompiledExpression = "3 * (1 + 1)".parse().unwrap();
    assert_eq!(expr.evaluate_constant().unwrap(), 6.0);
    assert_eq!(expr.to_string(), "3 * (1 + 1)");
}

use std::{collections::HashMap, sync::Arc, thread};

use rpnexpr::{
    CompiledExpression, EvalError, FunctionKind, Instruction, OperatorKind, Program, compile,
    evaluator::{constants, core::execute},
};

fn run(instructions: Vec<Instruction>) -> Result<f64, EvalError> {
    Program::new(instructions).execute(&HashMap::new())
}

#[test]
fn lone_operator_has_insufficient_operands() {
    assert_eq!(run(vec![Instruction::Operator(OperatorKind::Add)]),
               Err(EvalError::InsufficientOperands { operation: "+".to_string(),
                                                     required:  2,
                                                     available: 0, }));
}

#[test]
fn operator_with_one_operand_reports_depth() {
    assert_eq!(run(vec![Instruction::Value(1.0), Instruction::Operator(OperatorKind::Div)]),
               Err(EvalError::InsufficientOperands { operation: "/".to_string(),
                                                     required:  2,
                                                     available: 1, }));
}

#[test]
fn function_with_too_few_arguments() {
    assert_eq!(run(vec![Instruction::Value(1.0), Instruction::Function(FunctionKind::Atan)]),
               Err(EvalError::InsufficientOperands { operation: "Atan".to_string(),
                                                     required:  2,
                                                     available: 1, }));
    assert!(matches!(run(vec![Instruction::Function(FunctionKind::Sqrt)]),
                     Err(EvalError::InsufficientOperands { required: 1, .. })));
}

#[test]
fn leftover_values_break_the_invariant() {
    assert_eq!(run(vec![Instruction::Value(1.0), Instruction::Value(2.0)]),
               Err(EvalError::EvaluationInvariant { depth: 2 }));
    assert_eq!(run(Vec::new()), Err(EvalError::EvaluationInvariant { depth: 0 }));
}

#[test]
fn function_arguments_keep_call_order() {
    let program = vec![Instruction::Value(1.0),
                       Instruction::Value(-1.0),
                       Instruction::Function(FunctionKind::Atan)];
    let expected = 1.0_f64.atan2(-1.0);
    assert_eq!(run(program), Ok(expected));
}

#[test]
fn bindings_shadow_constants() {
    let program = [Instruction::Variable("e".to_string())];
    assert_eq!(execute(&program, &HashMap::new()), Ok(std::f64::consts::E));

    let bindings = HashMap::from([("e".to_string(), 2.0)]);
    assert_eq!(execute(&program, &bindings), Ok(2.0));
}

#[test]
fn constant_table_is_fixed() {
    assert_eq!(constants::CONSTANTS.len(), 2);
    assert_eq!(constants::lookup("e"), Some(std::f64::consts::E));
    assert_eq!(constants::lookup("tau"), None);
}

#[test]
fn evaluation_does_not_change_the_program() {
    let expr = compile("x * x - 1").unwrap();
    let before = expr.instructions().to_vec();

    for x in [0.0, 1.0, -3.5] {
        let bindings = HashMap::from([("x".to_string(), x)]);
        assert_eq!(expr.evaluate(&bindings), Ok(x * x - 1.0));
    }
    assert!(expr.evaluate_constant().is_err());
    assert_eq!(expr.instructions(), before.as_slice());
}

#[test]
fn compiled_expressions_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledExpression>();

    let expr = Arc::new(compile("Sqrt(x) + pi").unwrap());
    let handles: Vec<_> = (0..4).map(|i| {
                                    let expr = Arc::clone(&expr);
                                    thread::spawn(move || {
                                        let x = f64::from(i * i);
                                        let bindings = HashMap::from([("x".to_string(), x)]);
                                        expr.evaluate(&bindings).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = f64::from(u32::try_from(i).unwrap()) + std::f64::consts::PI;
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn variables_lists_names_once() {
    let expr = compile("x * y + x / pi").unwrap();
    assert_eq!(expr.variables(), ["x", "y", "pi"]);
    assert!(compile("1 + 2").unwrap().variables().is_empty());
}

#[test]
fn error_messages_name_the_culprit() {
    let err = compile("a + b").unwrap().evaluate_constant().unwrap_err();
    assert_eq!(err.to_string(), "Evaluation error: Missing required variable 'a'.");
}

#[test]
fn functions_reject_wrong_argument_counts() {
    assert_eq!(FunctionKind::Atan.apply(&[1.0]),
               Err(EvalError::InsufficientOperands { operation: "Atan".to_string(),
                                                     required:  2,
                                                     available: 1, }));
    assert!(FunctionKind::Sqrt.apply(&[]).is_err());
    assert!(FunctionKind::Abs.apply(&[1.0, 2.0]).is_err());
    for function in FunctionKind::ALL {
        assert!(function.apply(&[]).is_err(), "{function} accepted no arguments");
    }
    assert_eq!(FunctionKind::Abs.apply(&[-2.0]), Ok(2.0));
}

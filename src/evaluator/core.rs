use std::collections::HashMap;

use crate::{
    error::{EvalError, EvalResult},
    evaluator::constants,
    program::Instruction,
};

/// Executes a postfix program and returns its single result.
///
/// Each call works on its own operand stack, so a program can be executed
/// concurrently and repeatedly with identical results.
///
/// - `Value` pushes its number.
/// - `Variable` pushes the caller's binding, falling back to the constant
///   table (`pi`, `e`).
/// - `Operator` pops the right operand, then the left one, and pushes
///   `left op right`.
/// - `Function` pops its arguments (the last argument is on top) and pushes
///   the result.
///
/// Division and remainder by zero produce infinities or NaN, not errors.
///
/// # Errors
/// - `MissingVariable` if a name is bound neither by `bindings` nor by the
///   constant table.
/// - `InsufficientOperands` if an operator or function finds too few values.
/// - `EvaluationInvariant` if the stack does not hold exactly one value at
///   the end.
///
/// ## Example
/// ```
/// use std::collections::HashMap;
///
/// use rpnexpr::{EvalError, Instruction, OperatorKind, evaluator::core::execute};
///
/// let program = [Instruction::Value(7.0),
///                Instruction::Variable("x".into()),
///                Instruction::Operator(OperatorKind::Mod)];
/// let bindings = HashMap::from([("x".to_string(), 4.0)]);
/// assert_eq!(execute(&program, &bindings).unwrap(), 3.0);
///
/// let err = execute(&[Instruction::Operator(OperatorKind::Add)], &HashMap::new()).unwrap_err();
/// assert!(matches!(err, EvalError::InsufficientOperands { .. }));
/// ```
pub fn execute(instructions: &[Instruction], bindings: &HashMap<String, f64>) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        match instruction {
            Instruction::Value(value) => stack.push(*value),
            Instruction::Variable(name) => stack.push(resolve(name, bindings)?),
            Instruction::Operator(op) => {
                if stack.len() < 2 {
                    return Err(insufficient(op.to_string(), 2, stack.len()));
                }
                let operands = stack.split_off(stack.len() - 2);
                stack.push(op.apply(operands[0], operands[1]));
            },
            Instruction::Function(function) => {
                let arity = function.arity();
                if stack.len() < arity {
                    return Err(insufficient(function.to_string(), arity, stack.len()));
                }
                let args = stack.split_off(stack.len() - arity);
                stack.push(function.apply(&args)?);
            },
        }
        log::trace!("{instruction} -> depth {}", stack.len());
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => {
            log::debug!("program finished with stack depth {}", stack.len());
            Err(EvalError::EvaluationInvariant { depth: stack.len() })
        },
    }
}

/// Resolves a variable against the caller's bindings, then the constants.
fn resolve(name: &str, bindings: &HashMap<String, f64>) -> EvalResult<f64> {
    bindings.get(name)
            .copied()
            .or_else(|| constants::lookup(name))
            .ok_or_else(|| {
                log::debug!("unbound variable '{name}'");
                EvalError::MissingVariable { name: name.to_string() }
            })
}

fn insufficient(operation: String, required: usize, available: usize) -> EvalError {
    EvalError::InsufficientOperands { operation,
                                      required,
                                      available }
}

//! # rpnexpr
//!
//! rpnexpr compiles arithmetic expressions into linear postfix (RPN) programs
//! and evaluates them against caller-supplied variable bindings. An expression
//! is compiled once and can then be evaluated any number of times, from any
//! number of threads, with different variable values.
//!
//! The accepted language is small: decimal numbers, variables (identifiers
//! starting with a lowercase letter), the operators `+ - * / %`, parentheses
//! and the built-in functions `Sin`, `Cos`, `Tan`, `Asin`, `Acos`, `Atan`
//! (two arguments), `Sqrt` and `Abs`. The constants `pi` and `e` are always
//! available unless a binding with the same name shadows them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::implicit_hasher)]

/// Turns source text into a postfix program.
///
/// This module owns every compile-time stage: the structural pre-check, the
/// lexer and character classifier, the tokenizer, the sequence validator and
/// the shunting-yard translator. Each stage is public so that callers and
/// tests can drive it in isolation.
///
/// # Responsibilities
/// - Classifies characters and groups them into positioned raw tokens.
/// - Converts raw tokens into typed tokens and rejects malformed sequences.
/// - Emits the postfix instruction sequence.
pub mod compiler;
/// Provides unified error types for compilation and evaluation.
///
/// Compile-time errors carry the source position of the offending token;
/// evaluation errors name the variable or operation that failed.
pub mod error;
/// Executes postfix programs.
///
/// The evaluator is a stack machine that runs over an immutable instruction
/// sequence with a fresh operand stack per call, resolving variables against
/// the caller's bindings and then the built-in constant table.
pub mod evaluator;
/// The compiled, reusable expression value handed back to callers.
pub mod expression;
/// Defines the compiled representation.
///
/// This module declares the `Instruction` enum, the `Program` container and
/// the closed operator and function catalogs shared by the compiler and the
/// evaluator.
pub mod program;

pub use error::{CompileError, EvalError};
pub use expression::CompiledExpression;
pub use program::{FunctionKind, Instruction, OperatorKind, Program};

/// Compiles `source` into a reusable [`CompiledExpression`].
///
/// Compilation is deterministic and has no side effects besides logging. The
/// first defect found aborts compilation.
///
/// # Errors
/// Returns a [`CompileError`] describing the first problem found, together
/// with the position of the offending token where one exists.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use rpnexpr::compile;
///
/// let expr = compile("2 * x + 1").unwrap();
/// let bindings = HashMap::from([("x".to_string(), 4.0)]);
/// assert_eq!(expr.evaluate(&bindings).unwrap(), 9.0);
///
/// // Unbalanced input is rejected before evaluation is ever attempted.
/// assert!(compile("((1 + 2)").is_err());
/// ```
pub fn compile(source: &str) -> Result<CompiledExpression, CompileError> {
    let program = compiler::compile_program(source)?;
    Ok(CompiledExpression::new(source.to_string(), program))
}

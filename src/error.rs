/// Compilation errors.
///
/// Defines every error that can be raised while turning source text into a
/// postfix program: unbalanced or empty parentheses, malformed numeric
/// literals, unknown functions, malformed operator sequences and violations
/// of the translator's own invariants.
pub mod compile_error;
/// Evaluation errors.
///
/// Contains the errors raised while executing a postfix program: unresolved
/// variables, operations without enough operands and programs that leave the
/// operand stack in an unexpected state.
pub mod eval_error;

pub use compile_error::{CompileError, CompileResult};
pub use eval_error::{EvalError, EvalResult};

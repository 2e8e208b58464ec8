use std::collections::HashMap;

use crate::error::EvalResult;

/// The fixed catalog of built-in functions.
///
/// Function names, arities and implementations live in one table so that a
/// new function is a single-point change checked by the compiler.
pub mod function;
/// The binary arithmetic operators, their precedence and their semantics.
pub mod operator;

pub use function::FunctionKind;
pub use operator::OperatorKind;

/// A single element of a postfix program.
///
/// Operators and functions always follow the operands they consume, so a
/// program can be executed with one LIFO stack and no tree structure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Push a literal value.
    Value(f64),
    /// Pop two operands and push the result of the operator.
    Operator(OperatorKind),
    /// Pop as many operands as the function takes and push its result.
    Function(FunctionKind),
    /// Push the value bound to a variable name.
    Variable(String),
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// An ordered, immutable postfix instruction sequence.
///
/// Programs are normally produced by the compiler, but any sequence of
/// instructions can be wrapped and executed, which is handy for testing the
/// evaluator on programs no source text would produce.
///
/// ## Example
/// ```
/// use std::collections::HashMap;
///
/// use rpnexpr::{Instruction, OperatorKind, Program};
///
/// let program = Program::new(vec![Instruction::Value(8.0),
///                                 Instruction::Value(3.0),
///                                 Instruction::Operator(OperatorKind::Sub)]);
///
/// assert_eq!(program.to_string(), "8 3 -");
/// assert_eq!(program.execute(&HashMap::new()).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps an instruction sequence.
    #[must_use]
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Appends an instruction. Only the compiler builds programs incrementally.
    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// The instructions in execution order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program holds no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Runs the program against `bindings`.
    ///
    /// See [`crate::evaluator::core::execute`] for the exact semantics.
    pub fn execute(&self, bindings: &HashMap<String, f64>) -> EvalResult<f64> {
        crate::evaluator::core::execute(&self.instructions, bindings)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

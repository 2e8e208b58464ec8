/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a program.
pub enum EvalError {
    /// A variable is bound neither by the caller nor by the constant table.
    MissingVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator or function found fewer operands than it consumes.
    InsufficientOperands {
        /// The operator symbol or function name.
        operation: String,
        /// The number of operands the operation consumes.
        required:  usize,
        /// The number of operands on the stack.
        available: usize,
    },
    /// The program finished with a stack depth other than one.
    EvaluationInvariant {
        /// The stack depth left behind.
        depth: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariable { name } => {
                write!(f, "Evaluation error: Missing required variable '{name}'.")
            },
            Self::InsufficientOperands { operation,
                                         required,
                                         available, } => write!(f,
                                                                "Evaluation error: '{operation}' needs {required} operand(s), but only {available} available."),
            Self::EvaluationInvariant { depth } => write!(f,
                                                          "Evaluation error: Program left {depth} value(s) on the stack instead of exactly one."),
        }
    }
}

impl std::error::Error for EvalError {}

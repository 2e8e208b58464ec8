use crate::{compiler::lexer::SourcePosition, program::FunctionKind};

/// Result type used by every compilation stage.
pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling an expression.
pub enum CompileError {
    /// The source contained no tokens at all (empty or whitespace only).
    EmptyExpression,
    /// Opening and closing parentheses do not pair up.
    UnbalancedParentheses {
        /// Where the imbalance was detected.
        position: SourcePosition,
    },
    /// A run of digits and dots is not a valid number, e.g. `1.2.3`.
    NumericLiteral {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: SourcePosition,
    },
    /// A capitalised identifier does not name a built-in function.
    UnknownFunction {
        /// The identifier as written.
        name:     String,
        /// Where the identifier starts.
        position: SourcePosition,
    },
    /// An operator is followed by another operator, `)` or `,`, or ends the
    /// input, e.g. `1 + * 2`, `(1 + )` or `1 +`.
    AdjacentOperators {
        /// Position of the token found instead of an operand, or of the
        /// trailing operator.
        position: SourcePosition,
    },
    /// A pair of parentheses encloses nothing.
    EmptyParentheses {
        /// Position of the opening parenthesis.
        position: SourcePosition,
    },
    /// A comma appears outside the argument list of a function call.
    MisplacedComma {
        /// Position of the comma.
        position: SourcePosition,
    },
    /// A function call supplies the wrong number of arguments.
    ArgumentCount {
        /// The function being called.
        function: FunctionKind,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Position of the function name.
        position: SourcePosition,
    },
    /// A function name is not followed by its argument list.
    ExpectedCallParenthesis {
        /// The function missing its parentheses.
        function: FunctionKind,
        /// Position of the function name.
        position: SourcePosition,
    },
    /// An operator lacks its left operand, e.g. `* 2` or `(/ 2)`, or an
    /// argument list has an empty slot, e.g. `Atan(1, )`.
    MissingOperand {
        /// Position of the token where an operand was expected.
        position: SourcePosition,
    },
    /// Two operands follow each other without an operator, e.g. `2 3`.
    MissingOperator {
        /// Position of the second operand.
        position: SourcePosition,
    },
    /// The translator met a token sequence it cannot turn into a program.
    ///
    /// Validated input never produces this; it is reachable when the
    /// translator is driven directly with hand-built tokens.
    InternalParseInvariant {
        /// What went wrong.
        details:  String,
        /// Position of the token involved.
        position: SourcePosition,
    },
}

impl CompileError {
    /// Returns the source position attached to the error, if any.
    ///
    /// ## Example
    /// ```
    /// use rpnexpr::{compile, compiler::lexer::SourcePosition};
    ///
    /// let err = compile("1 + + 2").unwrap_err();
    /// assert_eq!(err.position(), Some(SourcePosition { column: 5, row: 1 }));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<SourcePosition> {
        match self {
            Self::EmptyExpression => None,
            Self::UnbalancedParentheses { position }
            | Self::NumericLiteral { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::AdjacentOperators { position }
            | Self::EmptyParentheses { position }
            | Self::MisplacedComma { position }
            | Self::ArgumentCount { position, .. }
            | Self::ExpectedCallParenthesis { position, .. }
            | Self::MissingOperand { position }
            | Self::MissingOperator { position }
            | Self::InternalParseInvariant { position, .. } => Some(*position),
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::UnbalancedParentheses { position } => {
                write!(f, "Error at {position}: Mismatched parentheses.")
            },
            Self::NumericLiteral { literal, position } => {
                write!(f, "Error at {position}: Invalid numeric literal '{literal}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at {position}: Unknown function '{name}'.")
            },
            Self::AdjacentOperators { position } => write!(f,
                                                           "Error at {position}: Expected an operand after the operator."),
            Self::EmptyParentheses { position } => {
                write!(f, "Error at {position}: Empty parentheses.")
            },
            Self::MisplacedComma { position } => write!(f,
                                                        "Error at {position}: Comma outside of a function's argument list."),
            Self::ArgumentCount { function,
                                  expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error at {position}: Function {function} takes {expected} argument(s), but {found} were supplied."),
            Self::ExpectedCallParenthesis { function, position } => write!(f,
                                                                           "Error at {position}: Expected '(' after function {function}."),
            Self::MissingOperand { position } => {
                write!(f, "Error at {position}: Operator is missing an operand.")
            },
            Self::MissingOperator { position } => {
                write!(f, "Error at {position}: Expected an operator between operands.")
            },
            Self::InternalParseInvariant { details, position } => {
                write!(f, "Error at {position}: Malformed program: {details}.")
            },
        }
    }
}

impl std::error::Error for CompileError {}

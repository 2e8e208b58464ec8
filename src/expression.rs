use std::{collections::HashMap, str::FromStr};

use crate::{
    error::{CompileError, EvalResult},
    program::{Instruction, Program},
};

/// A compiled expression: the source text and its postfix program.
///
/// Instances are immutable. Evaluation never changes the program, so one
/// compiled expression can be evaluated any number of times, from any
/// number of threads, with different bindings.
///
/// ## Example
/// ```
/// use std::collections::HashMap;
///
/// use rpnexpr::CompiledExpression;
///
/// let expr: CompiledExpression = "Sqrt(x * x + y * y)".parse().unwrap();
/// let bindings = HashMap::from([("x".to_string(), 3.0), ("y".to_string(), 4.0)]);
///
/// assert_eq!(expr.evaluate(&bindings).unwrap(), 5.0);
/// assert_eq!(expr.source_text(), "Sqrt(x * x + y * y)");
/// assert_eq!(expr.variables(), ["x", "y"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source:  String,
    program: Program,
}

impl CompiledExpression {
    pub(crate) const fn new(source: String, program: Program) -> Self {
        Self { source, program }
    }

    /// Evaluates the expression with the given variable bindings.
    ///
    /// `pi` and `e` are always available; a binding with the same name
    /// shadows them.
    pub fn evaluate(&self, bindings: &HashMap<String, f64>) -> EvalResult<f64> {
        self.program.execute(bindings)
    }

    /// Evaluates the expression without any caller bindings.
    ///
    /// ## Example
    /// ```
    /// let expr = rpnexpr::compile("2 * pi").unwrap();
    /// assert_eq!(expr.evaluate_constant().unwrap(), std::f64::consts::TAU);
    /// ```
    pub fn evaluate_constant(&self) -> EvalResult<f64> {
        self.evaluate(&HashMap::new())
    }

    /// The source text exactly as it was compiled.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source
    }

    /// The compiled program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The compiled instructions in execution order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        self.program.instructions()
    }

    /// Distinct variable names referenced by the expression, in order of
    /// first appearance. Constants such as `pi` are included when used.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for instruction in self.instructions() {
            if let Instruction::Variable(name) = instruction
               && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }
}

impl FromStr for CompiledExpression {
    type Err = CompileError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        crate::compile(source)
    }
}

impl std::fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

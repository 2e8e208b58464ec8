use crate::{
    error::{CompileError, CompileResult},
    program::Program,
};

/// Splits source text into positioned raw tokens.
///
/// Holds the character classifier and the `logos` lexer that groups
/// same-category characters into runs, tracking row and column for
/// diagnostics.
pub mod lexer;
/// Checks parenthesis balance on the raw text before lexing.
pub mod precheck;
/// Translates validated tokens into a postfix program.
///
/// An explicit operator stack implements the shunting-yard algorithm; no
/// recursion is involved, so stack depth is bounded by the token count.
pub mod translator;
/// Turns raw tokens into typed tokens: numbers, operators, parentheses,
/// commas, functions and variables.
pub mod tokenizer;
/// Rejects malformed token sequences before translation.
pub mod validator;

/// Runs the whole compilation pipeline on `source`.
///
/// Order: parenthesis pre-check, lexing, tokenizing, validation, translation.
/// The first failing stage aborts compilation.
///
/// ## Example
/// ```
/// use rpnexpr::compiler::compile_program;
///
/// let program = compile_program("2 + 3 * 4").unwrap();
/// assert_eq!(program.to_string(), "2 3 4 * +");
/// ```
pub fn compile_program(source: &str) -> CompileResult<Program> {
    log::debug!("compiling {source:?}");

    precheck::check_parentheses(source)?;

    let raw_tokens = lexer::lex(source)?;
    if raw_tokens.is_empty() {
        return Err(CompileError::EmptyExpression);
    }

    let tokens = tokenizer::tokenize(&raw_tokens)?;
    validator::validate(&tokens)?;
    let program = translator::translate(&tokens)?;

    log::debug!("compiled {source:?} into `{program}`");
    Ok(program)
}

use crate::{
    compiler::lexer::SourcePosition,
    error::{CompileError, CompileResult},
};

/// Checks that the source has as many `(` as `)`.
///
/// Only the net count is checked: `")1 + 2("` passes this pass even though it
/// closes a parenthesis before opening one. The validator rejects such input
/// later, once tokens carry positions.
///
/// On failure the error points at the first unmatched `(` when there are
/// more opening parentheses, or at the last `)` otherwise.
///
/// ## Example
/// ```
/// use rpnexpr::compiler::precheck::check_parentheses;
///
/// assert!(check_parentheses("(1 + 2) * 3").is_ok());
/// assert!(check_parentheses(")1 + 2(").is_ok());
/// assert!(check_parentheses("((1 + 2)").is_err());
/// ```
pub fn check_parentheses(source: &str) -> CompileResult<()> {
    let mut depth: i64 = 0;
    let mut open = Vec::new();
    let mut last_close = None;
    let mut position = SourcePosition::START;

    for ch in source.chars() {
        match ch {
            '(' => {
                depth += 1;
                open.push(position);
            },
            ')' => {
                depth -= 1;
                open.pop();
                last_close = Some(position);
            },
            _ => {},
        }

        if ch == '\n' {
            position.row += 1;
            position.column = 1;
        } else {
            position.column += 1;
        }
    }

    if depth == 0 {
        return Ok(());
    }

    let position = if depth > 0 { open.first().copied() } else { last_close };
    Err(CompileError::UnbalancedParentheses { position: position.unwrap_or(SourcePosition::START) })
}

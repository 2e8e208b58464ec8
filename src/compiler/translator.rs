use crate::{
    compiler::tokenizer::{Token, TokenKind},
    error::{CompileError, CompileResult},
    program::{Instruction, Program},
};

/// Translates an infix token sequence into a postfix program with the
/// shunting-yard algorithm.
///
/// Numbers and variables are emitted as soon as they are seen. Operators wait
/// on a stack until an operator of lower precedence arrives; equal precedence
/// pops too, which makes every operator left-associative. Function names wait
/// on the stack until the `)` closing their argument list, so a call is
/// emitted after all of its arguments.
///
/// A `+` or `-` in operand position (first token, or directly after `(` or
/// `,`) is a sign: the translator emits a negative zero before it, turning
/// `-x` into `-0 x -`. Starting from `-0` keeps the sign of zero operands,
/// so `-0` stays negative zero and `+0` stays positive.
///
/// The input is expected to have passed the validator.
///
/// # Errors
/// `InternalParseInvariant` if the tokens cannot form a program, e.g. a
/// function name with no argument list or a `)` with no matching `(`.
///
/// ## Example
/// ```
/// use rpnexpr::compiler::{lexer::lex, tokenizer::tokenize, translator::translate};
///
/// let tokens = tokenize(&lex("Atan(1, 2) * (-x + 3)").unwrap()).unwrap();
/// let program = translate(&tokens).unwrap();
/// assert_eq!(program.to_string(), "1 2 Atan -0 x - 3 + *");
/// ```
pub fn translate(tokens: &[Token]) -> CompileResult<Program> {
    let mut program = Program::default();
    let mut stack: Vec<&Token> = Vec::new();
    let mut previous: Option<&TokenKind> = None;

    for token in tokens {
        match &token.kind {
            TokenKind::Number(value) => program.push(Instruction::Value(*value)),
            TokenKind::Variable(name) => program.push(Instruction::Variable(name.clone())),
            TokenKind::Function(_) | TokenKind::OpenParen => stack.push(token),
            TokenKind::Comma => {
                pop_until_open_paren(&mut stack, &mut program, token)?;
            },
            TokenKind::Operator(op) => {
                if matches!(previous,
                            None | Some(TokenKind::OpenParen | TokenKind::Comma))
                {
                    program.push(Instruction::Value(-0.0));
                }

                while let Some(top) = stack.last()
                      && let TokenKind::Operator(top_op) = top.kind
                      && top_op.precedence() >= op.precedence()
                {
                    program.push(Instruction::Operator(top_op));
                    stack.pop();
                }
                stack.push(token);
            },
            TokenKind::CloseParen => {
                pop_until_open_paren(&mut stack, &mut program, token)?;
                stack.pop();

                if let Some(top) = stack.last()
                   && let TokenKind::Function(function) = top.kind
                {
                    program.push(Instruction::Function(function));
                    stack.pop();
                }
            },
        }
        previous = Some(&token.kind);
    }

    while let Some(top) = stack.pop() {
        match top.kind {
            TokenKind::Operator(op) => program.push(Instruction::Operator(op)),
            ref other => {
                log::debug!("operator stack drain met {other} at {}", top.position);
                return Err(CompileError::InternalParseInvariant { details: format!("unexpected '{other}' left on the operator stack"),
                                                                  position: top.position });
            },
        }
    }

    Ok(program)
}

/// Emits stacked operators until an `(` is on top. The `(` stays on the
/// stack.
fn pop_until_open_paren(stack: &mut Vec<&Token>,
                        program: &mut Program,
                        at: &Token)
                        -> CompileResult<()> {
    loop {
        let Some(top) = stack.last() else {
            return Err(CompileError::InternalParseInvariant { details: format!("no '(' before '{}'",
                                                                                at.kind),
                                                              position: at.position });
        };
        match top.kind {
            TokenKind::OpenParen => return Ok(()),
            TokenKind::Operator(op) => {
                program.push(Instruction::Operator(op));
                stack.pop();
            },
            ref other => {
                return Err(CompileError::InternalParseInvariant { details: format!("unexpected '{other}' inside parentheses"),
                                                                  position: top.position });
            },
        }
    }
}

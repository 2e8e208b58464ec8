use crate::{
    compiler::{
        lexer::SourcePosition,
        tokenizer::{Token, TokenKind},
    },
    error::{CompileError, CompileResult},
    program::FunctionKind,
};

/// Rejects token sequences the translator cannot turn into a sound program.
///
/// The checks run in a fixed order and the first failure wins:
/// 1. every operator is followed by an operand: no two operators in a row,
///    no operator before `)` or `,` and none at the end (`AdjacentOperators`);
/// 2. no `(` directly followed by `)` (`EmptyParentheses`);
/// 3. structure: commas only inside function calls, exact argument counts,
///    a `(` after every function name, operators with both operands and
///    operands separated by operators.
///
/// Every function token already names a catalog entry: the tokenizer refuses
/// unknown names and `TokenKind::Function` cannot hold anything else.
///
/// `+` and `-` are accepted where an operand is expected (at the start, after
/// `(` or after `,`) and act as signs.
///
/// ## Example
/// ```
/// use rpnexpr::{
///     CompileError,
///     compiler::{lexer::lex, tokenizer::tokenize, validator::validate},
/// };
///
/// let tokens = tokenize(&lex("Atan(1, -2)").unwrap()).unwrap();
/// assert!(validate(&tokens).is_ok());
///
/// let tokens = tokenize(&lex("Sqrt(1, 2)").unwrap()).unwrap();
/// assert!(matches!(validate(&tokens), Err(CompileError::ArgumentCount { .. })));
/// ```
pub fn validate(tokens: &[Token]) -> CompileResult<()> {
    check_adjacent_operators(tokens)?;
    check_empty_parentheses(tokens)?;
    check_structure(tokens)
}

/// Fails on the first operator that is not followed by an operand.
///
/// That is an operator directly followed by another operator, by `)` or by
/// `,`, or an operator ending the input. The error points at the token that
/// stands where the operand should be, or at the trailing operator.
///
/// ## Example
/// ```
/// use rpnexpr::{
///     CompileError,
///     compiler::{lexer::lex, tokenizer::tokenize, validator::check_adjacent_operators},
/// };
///
/// for src in ["1 + + 2", "(1 + )", "Atan(1 -, 2)", "1 +"] {
///     let tokens = tokenize(&lex(src).unwrap()).unwrap();
///     assert!(matches!(check_adjacent_operators(&tokens),
///                      Err(CompileError::AdjacentOperators { .. })));
/// }
/// ```
pub fn check_adjacent_operators(tokens: &[Token]) -> CompileResult<()> {
    if let Some(pair) = tokens.windows(2).find(|pair| {
                                             pair[0].is_operator()
                                             && matches!(pair[1].kind,
                                                         TokenKind::Operator(_)
                                                         | TokenKind::CloseParen
                                                         | TokenKind::Comma)
                                         })
    {
        return Err(CompileError::AdjacentOperators { position: pair[1].position });
    }
    match tokens.last() {
        Some(last) if last.is_operator() => {
            Err(CompileError::AdjacentOperators { position: last.position })
        },
        _ => Ok(()),
    }
}

/// Fails on the first `(` that is immediately closed.
pub fn check_empty_parentheses(tokens: &[Token]) -> CompileResult<()> {
    match tokens.windows(2).find(|pair| {
                               matches!((&pair[0].kind, &pair[1].kind),
                                        (TokenKind::OpenParen, TokenKind::CloseParen))
                           }) {
        Some(pair) => Err(CompileError::EmptyParentheses { position: pair[0].position }),
        None => Ok(()),
    }
}

/// An open parenthesised group seen while walking the tokens.
struct Group {
    /// The function whose argument list this group is, if any.
    call:      Option<(FunctionKind, SourcePosition)>,
    /// Arguments seen so far; commas add one each.
    arguments: usize,
    /// Position of the `(`.
    position:  SourcePosition,
}

/// Walks the tokens once, tracking whether an operand or an operator comes
/// next and which parenthesised groups are open.
///
/// # Errors
/// - `MissingOperand` for a binary operator without a left operand, an empty
///   argument after a comma, or an operator without a right operand when
///   `check_adjacent_operators` has not run first.
/// - `MissingOperator` for two operands in a row.
/// - `MisplacedComma` for a comma outside a function's argument list.
/// - `ArgumentCount` when a call's argument count differs from the arity.
/// - `ExpectedCallParenthesis` when a function name is not followed by `(`.
/// - `UnbalancedParentheses` for a `)` without a preceding `(`, or a `(`
///   that is never closed.
pub fn check_structure(tokens: &[Token]) -> CompileResult<()> {
    let mut groups: Vec<Group> = Vec::new();
    let mut expect_operand = true;
    let mut pending_call: Option<(FunctionKind, SourcePosition)> = None;

    for token in tokens {
        let position = token.position;

        if let Some((function, call_position)) = pending_call
           && !matches!(token.kind, TokenKind::OpenParen)
        {
            return Err(CompileError::ExpectedCallParenthesis { function,
                                                               position: call_position });
        }

        match &token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) => {
                if !expect_operand {
                    return Err(CompileError::MissingOperator { position });
                }
                expect_operand = false;
            },
            TokenKind::Function(function) => {
                if !expect_operand {
                    return Err(CompileError::MissingOperator { position });
                }
                pending_call = Some((*function, position));
            },
            TokenKind::OpenParen => {
                if !expect_operand {
                    return Err(CompileError::MissingOperator { position });
                }
                groups.push(Group { call: pending_call.take(),
                                    arguments: 1,
                                    position });
            },
            TokenKind::CloseParen => {
                let group = groups.pop()
                                  .ok_or(CompileError::UnbalancedParentheses { position })?;
                if expect_operand {
                    return Err(CompileError::MissingOperand { position });
                }
                if let Some((function, call_position)) = group.call
                   && group.arguments != function.arity()
                {
                    return Err(CompileError::ArgumentCount { function,
                                                             expected: function.arity(),
                                                             found: group.arguments,
                                                             position: call_position });
                }
            },
            TokenKind::Comma => {
                match groups.last_mut() {
                    Some(group) if group.call.is_some() => group.arguments += 1,
                    _ => return Err(CompileError::MisplacedComma { position }),
                }
                if expect_operand {
                    return Err(CompileError::MissingOperand { position });
                }
                expect_operand = true;
            },
            TokenKind::Operator(op) => {
                if expect_operand && !op.is_sign() {
                    return Err(CompileError::MissingOperand { position });
                }
                expect_operand = true;
            },
        }
    }

    if let Some((function, position)) = pending_call {
        return Err(CompileError::ExpectedCallParenthesis { function, position });
    }
    if let Some(group) = groups.first() {
        return Err(CompileError::UnbalancedParentheses { position: group.position });
    }
    if expect_operand && let Some(last) = tokens.last() {
        return Err(CompileError::MissingOperand { position: last.position });
    }

    Ok(())
}

use crate::{
    compiler::lexer::{LexicalCategory, RawToken, SourcePosition, classify},
    error::{CompileError, CompileResult},
    program::{FunctionKind, OperatorKind},
};

/// The meaning of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal such as `3`, `0.25` or `.5`.
    Number(f64),
    /// One of `+ - * / %`.
    Operator(OperatorKind),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// A built-in function name, e.g. `Sqrt`.
    Function(FunctionKind),
    /// A free variable, resolved at evaluation time.
    Variable(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number: {value}"),
            Self::Operator(op) => write!(f, "Operator: {op}"),
            Self::OpenParen => write!(f, "Open paren"),
            Self::CloseParen => write!(f, "Close paren"),
            Self::Comma => write!(f, "Comma"),
            Self::Function(function) => write!(f, "Function: {function}"),
            Self::Variable(name) => write!(f, "Variable: {name}"),
        }
    }
}

/// A classified token together with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Where the token starts.
    pub position: SourcePosition,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// Returns `true` for operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }
}

/// Converts every raw token into a typed token, stopping at the first error.
pub fn tokenize(raw_tokens: &[RawToken<'_>]) -> CompileResult<Vec<Token>> {
    let tokens = raw_tokens.iter()
                           .map(classify_token)
                           .collect::<CompileResult<Vec<_>>>()?;
    log::trace!("tokenized into {} token(s)", tokens.len());
    Ok(tokens)
}

/// Converts a single raw token into a typed token.
///
/// The kind is chosen from the category of the first character:
/// - digits and `.`: the whole text must parse as a number;
/// - operators, parentheses and commas map directly;
/// - letters: an uppercase first character makes a function name, which must
///   be in the catalog; anything else is a variable, kept verbatim.
///
/// # Errors
/// - `NumericLiteral` if a number does not parse, e.g. `1.2.3` or `.`.
/// - `UnknownFunction` if a capitalised name is not a built-in function.
///
/// ## Example
/// ```
/// use rpnexpr::{
///     FunctionKind,
///     compiler::{
///         lexer::lex,
///         tokenizer::{TokenKind, classify_token},
///     },
/// };
///
/// let raw = lex("Cos(theta)").unwrap();
/// assert_eq!(classify_token(&raw[0]).unwrap().kind, TokenKind::Function(FunctionKind::Cos));
/// assert_eq!(classify_token(&raw[2]).unwrap().kind, TokenKind::Variable("theta".into()));
/// ```
pub fn classify_token(raw: &RawToken<'_>) -> CompileResult<Token> {
    let position = raw.position;
    let Some(first) = raw.text.chars().next() else {
        return Err(CompileError::InternalParseInvariant { details: "empty raw token".to_string(),
                                                          position });
    };

    let kind = match classify(first) {
        LexicalCategory::Number => {
            let value = raw.text.parse::<f64>().map_err(|_| {
                                                   CompileError::NumericLiteral { literal: raw.text.to_string(),
                                                                                  position }
                                               })?;
            TokenKind::Number(value)
        },
        LexicalCategory::Operator => {
            let op = OperatorKind::from_symbol(first).ok_or_else(|| {
                         CompileError::InternalParseInvariant { details: format!("'{first}' is not an operator"),
                                                                position }
                     })?;
            TokenKind::Operator(op)
        },
        LexicalCategory::Parenthesis if first == '(' => TokenKind::OpenParen,
        LexicalCategory::Parenthesis => TokenKind::CloseParen,
        LexicalCategory::Comma => TokenKind::Comma,
        LexicalCategory::Letter if first.is_uppercase() => {
            let function =
                FunctionKind::from_name(raw.text).ok_or_else(|| CompileError::UnknownFunction {
                                                     name: raw.text.to_string(),
                                                     position,
                                                 })?;
            TokenKind::Function(function)
        },
        LexicalCategory::Letter => TokenKind::Variable(raw.text.to_string()),
        LexicalCategory::Whitespace => {
            return Err(CompileError::InternalParseInvariant { details: "whitespace reached the tokenizer".to_string(),
                                                              position });
        },
    };

    Ok(Token { kind, position })
}

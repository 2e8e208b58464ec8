use logos::{Lexer, Logos, Skip};

use crate::error::{CompileError, CompileResult};

/// A 1-based location in the source text.
///
/// The column advances once per character; a newline increments the row and
/// resets the column to 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    /// Column of the character, counted in characters from the start of the
    /// row.
    pub column: usize,
    /// Row of the character.
    pub row:    usize,
}

impl SourcePosition {
    /// The position of the first character of any source.
    pub const START: Self = Self { column: 1,
                                   row:    1, };
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}, row {}", self.column, self.row)
    }
}

/// The coarse lexical class of a single character.
///
/// Runs of characters sharing a category form one raw token, except for
/// `Operator`, `Parenthesis` and `Comma`, which always produce one token per
/// character. Whitespace never produces tokens.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum LexicalCategory {
    /// Identifier characters: anything not claimed by another category.
    #[regex(r"[^0-9.+\-*/%(),\t \n]+")]
    Letter,
    /// Digits and the decimal point.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+ - * / %`
    #[regex(r"[+\-*/%]")]
    Operator,
    /// `(` and `)`
    #[regex(r"[()]")]
    Parenthesis,
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t]+", logos::skip)]
    #[token("\n", newline)]
    Whitespace,
    /// `,`
    #[token(",")]
    Comma,
}

impl LexicalCategory {
    /// Returns `true` if every character of this category is a token of its
    /// own.
    #[must_use]
    pub const fn is_single_char(self) -> bool {
        matches!(self, Self::Operator | Self::Parenthesis | Self::Comma)
    }
}

/// Classifies a single character.
///
/// Every character maps to exactly one category; anything that is not a
/// digit, `.`, operator, parenthesis, comma or whitespace is a `Letter`.
///
/// ## Example
/// ```
/// use rpnexpr::compiler::lexer::{LexicalCategory, classify};
///
/// assert_eq!(classify('7'), LexicalCategory::Number);
/// assert_eq!(classify('.'), LexicalCategory::Number);
/// assert_eq!(classify('%'), LexicalCategory::Operator);
/// assert_eq!(classify('\t'), LexicalCategory::Whitespace);
/// assert_eq!(classify('π'), LexicalCategory::Letter);
/// ```
#[must_use]
pub const fn classify(ch: char) -> LexicalCategory {
    match ch {
        '0'..='9' | '.' => LexicalCategory::Number,
        '+' | '-' | '*' | '/' | '%' => LexicalCategory::Operator,
        '(' | ')' => LexicalCategory::Parenthesis,
        '\t' | ' ' | '\n' => LexicalCategory::Whitespace,
        ',' => LexicalCategory::Comma,
        _ => LexicalCategory::Letter,
    }
}

/// Additional information carried by the lexer during scanning.
///
/// Tracks the current row and the byte offset where it starts so that each
/// token's column can be computed from its span.
pub struct LexerExtras {
    /// The current row.
    pub row:        usize,
    /// Byte offset of the first character of the current row.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { row:        1,
               line_start: 0, }
    }
}

/// Advances the row counter past a newline.
fn newline(lex: &mut Lexer<LexicalCategory>) -> Skip {
    lex.extras.row += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

/// A run of same-category characters, before any interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// The characters of the token, borrowed from the source.
    pub text:     &'a str,
    /// The category shared by every character of the token.
    pub category: LexicalCategory,
    /// Where the token starts.
    pub position: SourcePosition,
}

/// Splits `source` into raw tokens.
///
/// Whitespace separates tokens and is dropped. Empty or whitespace-only input
/// produces an empty vector.
///
/// # Errors
/// The categories cover every character, so scanning cannot fail on valid
/// UTF-8 text; a failure from the underlying lexer is reported as an
/// `InternalParseInvariant` error.
///
/// ## Example
/// ```
/// use rpnexpr::compiler::lexer::{LexicalCategory, lex};
///
/// let tokens = lex("Sqrt(x2)").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["Sqrt", "(", "x", "2", ")"]);
/// assert_eq!(tokens[3].category, LexicalCategory::Number);
/// ```
pub fn lex(source: &str) -> CompileResult<Vec<RawToken<'_>>> {
    let mut lexer = LexicalCategory::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(category) = lexer.next() {
        let span = lexer.span();
        let column = source[lexer.extras.line_start..span.start].chars().count() + 1;
        let position = SourcePosition { column,
                                        row: lexer.extras.row };

        let Ok(category) = category else {
            return Err(CompileError::InternalParseInvariant { details: format!("unclassifiable input '{}'",
                                                                                lexer.slice()),
                                                              position });
        };

        tokens.push(RawToken { text: lexer.slice(),
                               category,
                               position });
    }

    log::trace!("lexed {} raw token(s)", tokens.len());
    Ok(tokens)
}

use std::fmt;

/// Lexical errors.
///
/// Raised by the lexer for characters outside the token alphabet and for
/// integer literals that do not fit the numeric type. Lexical errors are
/// recovered from: the lexer skips the offending input and continues.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression
/// tree: unexpected tokens, missing operands, unbalanced parentheses and
/// trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that prevents a line from producing a value.
///
/// Lexical errors are not part of this type because they never stop a line on
/// their own; they are reported next to the outcome instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The tokens did not form a single complete expression.
    Syntax(ParseError),
    /// The expression was well formed but could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

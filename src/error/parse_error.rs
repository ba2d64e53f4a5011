use crate::interpreter::{
    lexer::{Position, Token},
    parser::core::MAX_NESTING,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression here.
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Where the token was found.
        position: Position,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// The position of the end of input.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The position of the unmatched opening parenthesis.
        position: Position,
    },
    /// The expression nests deeper than the parser allows.
    NestingTooDeep {
        /// Where the limit was exceeded.
        position: Position,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    Token,
        /// Where it was found.
        position: Position,
    },
}

impl ParseError {
    /// The message shown when details are not requested.
    pub const GENERIC_MESSAGE: &'static str = "Syntax error in input!";

    /// Where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at {position}: Unexpected token '{token}'.")
            },
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at {position}: Unexpected end of input.")
            },
            Self::ExpectedClosingParen { position } => {
                write!(f, "Syntax error at {position}: Expected closing parenthesis ')' but none found.")
            },
            Self::UnexpectedTrailingTokens { token, position } => {
                write!(f, "Syntax error at {position}: Extra tokens after expression, starting with '{token}'.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Syntax error at {position}: Expression is nested more than {MAX_NESTING} levels deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

use crate::interpreter::lexer::Position;

/// Failure reported by the scanner for a single match attempt.
///
/// This is the error type the token enum is derived with. Input that matches
/// no token pattern falls back to the default, `IllegalCharacter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// The character is not part of the token alphabet.
    #[default]
    IllegalCharacter,
    /// A run of digits does not fit in a 64-bit signed integer.
    LiteralTooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character outside the token alphabet was skipped.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// An integer literal was too large and was skipped.
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Where the error was found.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IllegalCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, position } => {
                write!(f, "Illegal character '{character}' at {position}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Literal {literal} at {position} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}

use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The position of the `/` operator.
        position: Position,
    },
    /// Arithmetic overflowed the numeric type.
    Overflow {
        /// The position of the operator.
        position: Position,
    },
    /// An integer could not be converted to a real number without losing
    /// precision.
    PrecisionLoss {
        /// The position of the operator that needed the conversion.
        position: Position,
    },
}

impl RuntimeError {
    /// Where the failing operator is.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::PrecisionLoss { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => write!(f, "Error at {position}: Division by zero."),
            Self::Overflow { position } => {
                write!(f, "Error at {position}: Overflow while trying to compute result.")
            },
            Self::PrecisionLoss { position } => {
                write!(f, "Error at {position}: Integer is too large to be divided exactly.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

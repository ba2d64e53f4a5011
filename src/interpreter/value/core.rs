use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position},
    util::num::i64_to_f64_exact,
};

/// Represents a runtime value in the calculator.
///
/// Literals and the results of `+`, `-` and `*` on integers are integers.
/// Division always produces a real, and any operation that involves a real
/// produces a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers are converted only if they are exactly representable.
    ///
    /// # Parameters
    /// - `position`: Position of the operator requesting the conversion.
    ///
    /// # Errors
    /// `RuntimeError::PrecisionLoss` if the integer is too large.
    pub fn as_real(self, position: Position) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(i) => i64_to_f64_exact(i, || RuntimeError::PrecisionLoss { position }),
        }
    }

    /// Returns `true` if the value is zero, integer or real.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

/// Integers print as-is. Reals always show a fractional part, so `8 / 2` is
/// shown as `4.0` and is distinguishable from the integer `4`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{r:.1}")
            },
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

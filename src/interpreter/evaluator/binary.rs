use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::core::Value},
};

/// Evaluates a binary arithmetic operation between two values.
///
/// Division always converts both operands to reals and performs true
/// division. The other operators stay in integer arithmetic when both operands
/// are integers and switch to real arithmetic as soon as one of them is real.
/// A zero divisor is rejected before dividing.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and `right` is zero.
/// - `Overflow` if an integer operation overflows or a real result is not
///   finite.
/// - `PrecisionLoss` if an integer operand cannot be converted to a real
///   exactly.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, lexer::Position, value::core::Value},
/// };
///
/// let at = Position::default();
/// let sum = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), at);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let quotient = eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), at);
/// assert_eq!(quotient.unwrap(), Value::Real(3.5));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: Position)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Sub};
    use Value::{Integer, Real};

    if op == Div && right.is_zero() {
        return Err(RuntimeError::DivisionByZero { position });
    }

    match (left, right) {
        (Integer(a), Integer(b)) if op != Div => {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                _ => a.checked_mul(b),
            };
            result.map(Integer)
                  .ok_or(RuntimeError::Overflow { position })
        },
        _ => eval_real(op, left.as_real(position)?, right.as_real(position)?, position).map(Real),
    }
}

/// Applies `op` in floating point, rejecting non-finite results.
fn eval_real(op: BinaryOperator, a: f64, b: f64, position: Position) -> EvalResult<f64> {
    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(RuntimeError::Overflow { position })
    }
}

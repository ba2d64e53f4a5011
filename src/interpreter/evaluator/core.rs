use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// Literals evaluate to themselves. Binary operations evaluate the left
/// operand, then the right one, then apply the operator.
///
/// # Errors
/// Propagates the first `RuntimeError` raised anywhere in the tree.
///
/// # Example
/// ```
/// use linecalc::{
///     interpreter::{
///         evaluator::core::eval, lexer::Lexer, parser::core::parse_line, value::core::Value,
///     },
/// };
///
/// let lexed = Lexer::new("(2 + 3) * 4", 1).tokenize();
/// let expr = parse_line(&mut lexed.tokens.iter().peekable()).unwrap();
/// assert_eq!(eval(&expr).unwrap(), Value::Integer(20));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::Integer(*value)),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}

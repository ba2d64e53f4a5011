/// Largest integer magnitude that an `f64` holds exactly (`2^53 - 1`).
pub const MAX_EXACT_F64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64`, refusing values that would be rounded.
///
/// The error is built lazily by `on_loss`, only when the conversion fails.
///
/// ## Errors
/// Returns the error produced by `on_loss` when `|value|` exceeds
/// [`MAX_EXACT_F64_INT`].
///
/// ## Example
/// ```
/// use linecalc::util::num::{MAX_EXACT_F64_INT, i64_to_f64_exact};
///
/// assert_eq!(i64_to_f64_exact(-42, || "lossy"), Ok(-42.0));
///
/// let big = i64::try_from(MAX_EXACT_F64_INT).unwrap() + 1;
/// assert_eq!(i64_to_f64_exact(big, || "lossy"), Err("lossy"));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_exact<E>(value: i64, on_loss: impl FnOnce() -> E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_EXACT_F64_INT {
        return Err(on_loss());
    }
    Ok(value as f64)
}

/// Numeric conversion helpers.
///
/// This module provides a safe conversion from integers to floating point that
/// refuses to round silently. Division converts its operands through it.
pub mod num;

/// Core evaluation logic.
///
/// Contains the result type and the tree walk that dispatches on expression
/// variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators over integers and reals, including
/// overflow and division-by-zero checks.
pub mod binary;

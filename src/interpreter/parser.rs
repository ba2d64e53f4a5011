/// Core parsing entry points.
///
/// Contains the result type, the expression entry point and the line-level
/// parser that insists on a single complete expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over the two operator tiers.
pub mod binary;

/// Primary expression parsing.
///
/// Handles number literals and parenthesized groups.
pub mod primary;

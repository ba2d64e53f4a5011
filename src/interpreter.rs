/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the expression tree bottom-up, applies the arithmetic
/// operators and produces a single value.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Keeps integer arithmetic exact and switches to reals for division.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input for further parsing.
///
/// The lexer reads the raw text and produces a lazy stream of tokens, each
/// tagged with its line and column: integer literals, the four operators and
/// parentheses. Whitespace is skipped and newlines only advance the line
/// counter.
///
/// # Responsibilities
/// - Converts the input characters into positioned tokens.
/// - Converts integer literals to their value at lex time.
/// - Reports illegal characters and recovers by skipping them.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser uses precedence climbing: `*` and `/` bind tighter than `+` and
/// `-`, and operators of equal precedence associate to the left.
/// Parenthesized groups override precedence.
///
/// # Responsibilities
/// - Converts tokens into an [`Expr`](crate::ast::Expr) tree.
/// - Rejects anything that is not exactly one complete expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers and reals.
/// - Provides exact promotion from integer to real.
/// - Renders values for display.
pub mod value;

use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Spanned,
        parser::{
            core::{MAX_NESTING, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses a chain of binary operations by precedence climbing.
///
/// A primary expression is parsed first. Then, as long as the next token is an
/// operator whose precedence is at least `min_precedence`, the operator is
/// consumed and its right operand is parsed with a minimum of one tier higher.
/// Raising the minimum for the right side is what makes equal-precedence
/// operators fold to the left: `8 - 3 - 2` becomes `(8 - 3) - 2`.
///
/// Each fold deepens the tree by one, so long chains such as `1 + 1 + ... + 1`
/// are bounded by [`MAX_NESTING`] just like parentheses are.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `min_precedence`: Lowest operator precedence this call may consume.
/// - `nesting`: Number of enclosing parentheses.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the bare primary if no operator follows.
///
/// # Errors
/// `NestingTooDeep` at the operator that would make the tree deeper than
/// [`MAX_NESTING`].
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           nesting: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_primary(tokens, nesting)?;
    let mut depth = left.depth();
    while let Some((token, position)) = tokens.peek()
          && let Some(op) = BinaryOperator::from_token(token)
          && op.precedence() >= min_precedence
    {
        let position = *position;
        tokens.next();
        let right = parse_binary(tokens, op.precedence() + 1, nesting)?;
        depth = 1 + depth.max(right.depth());
        if depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { position });
        }
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

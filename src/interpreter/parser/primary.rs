use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{MAX_NESTING, ParseResult, end_position, parse_nested},
    },
};

/// Parses a primary expression.
///
/// Grammar: `primary := NUMBER | "(" expression ")"`
///
/// # Errors
/// - `UnexpectedEndOfInput` if no operand is left, as in `1 +` or an empty
///   line.
/// - `UnexpectedToken` for an operator or `)` where an operand is expected.
/// - `NestingTooDeep` for a group opened more than [`MAX_NESTING`] levels
///   deep.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let Some(&&(token, position)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { position: end_position(tokens) });
    };

    match token {
        Token::Number(value) => {
            tokens.next();
            Ok(Expr::Literal { value, position })
        },
        Token::LParen => parse_grouping(tokens, nesting + 1),
        Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { position }),
        _ => Err(ParseError::UnexpectedToken { token, position }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// `ExpectedClosingParen`, pointing at the opening parenthesis, if the group
/// is not closed, or `NestingTooDeep` if `nesting` exceeds [`MAX_NESTING`].
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let open = tokens.next().map(|(_, position)| *position).unwrap_or_default();
    if nesting > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { position: open });
    }
    let expr = parse_nested(tokens, nesting)?;
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(expr)
        },
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}

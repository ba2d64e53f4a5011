use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Position, Spanned, Token},
        parser::binary::parse_binary,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power below every operator, used to start a full expression.
pub const LOWEST_PRECEDENCE: u8 = 0;

/// Deepest nesting the parser accepts, counted both in open parentheses and in
/// the depth of the resulting tree. Parsing and evaluation recurse once per
/// level, so the limit keeps them within the stack.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing at the lowest binding power, so every operator is accepted, and at
/// nesting level zero.
///
/// Grammar: `expression := primary (operator primary)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_nested(tokens, 0)
}

/// Parses a full expression found `nesting` parentheses deep.
pub(in crate::interpreter::parser) fn parse_nested<'a, I>(tokens: &mut Peekable<I>,
                                                          nesting: usize)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_binary(tokens, LOWEST_PRECEDENCE, nesting)
}

/// Parses one line worth of tokens into a single expression.
///
/// The token sequence must reduce to exactly one expression followed by
/// [`Token::EndOfInput`]. An empty sequence, or one that holds only the end
/// marker, is an unexpected end of input. Anything left over after the
/// expression is reported as trailing tokens. Input nested deeper than
/// [`MAX_NESTING`] is rejected with `NestingTooDeep`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The expression tree of the line.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form exactly one expression.
///
/// # Example
/// ```
/// use linecalc::interpreter::{lexer::Lexer, parser::core::parse_line};
///
/// let lexed = Lexer::new("8 - 3 - 2", 1).tokenize();
/// let expr = parse_line(&mut lexed.tokens.iter().peekable()).unwrap();
/// assert_eq!(expr.to_string(), "((8 - 3) - 2)");
/// ```
pub fn parse_line<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::EndOfInput, _)) | None => Ok(expr),
        Some((token, position)) => Err(ParseError::UnexpectedTrailingTokens { token:    *token,
                                                                              position: *position, }),
    }
}

/// Position to report when the token stream ran dry without an end marker.
pub(in crate::interpreter::parser) fn end_position<'a, I>(tokens: &mut Peekable<I>) -> Position
    where I: Iterator<Item = &'a Spanned>
{
    tokens.peek().map_or_else(Position::default, |(_, position)| *position)
}

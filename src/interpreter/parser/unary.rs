use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::Expr,
    error::ErrorKind,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::{MAX_NESTING, ParseResult, parse_expression},
    },
};

/// Parses an operand, with optional leading unary minus.
///
/// Unary minus is only reachable where an operand is expected: at the start
/// of the expression, after a binary operator, or after `(`. It is rewritten
/// as `0 - operand` and may repeat, so `- -3` is `0 - (0 - 3)`. There is no
/// unary plus.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Errors
/// Returns `ErrorKind::InvalidExpression` when nesting exceeds
/// [`MAX_NESTING`].
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    if depth > MAX_NESTING {
        debug!(depth, "expression nested too deeply");
        return Err(ErrorKind::InvalidExpression);
    }

    if let Some((Token::Minus, offset)) = tokens.peek() {
        let offset = *offset;
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        Ok(Expr::negation(operand, offset))
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns `ErrorKind::InvalidExpression` when the next token cannot start an
/// operand, or when the input ends where an operand is expected.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), offset)) => Ok(Expr::literal(*value, *offset)),
        Some((Token::LParen, _)) => parse_grouping(tokens, depth),
        Some((token, offset)) => {
            debug!(offset, ?token, "expected an operand");
            Err(ErrorKind::InvalidExpression)
        },
        None => {
            debug!("unexpected end of input");
            Err(ErrorKind::InvalidExpression)
        },
    }
}

/// Parses the inside of a parenthesised group, after its `(`.
///
/// An empty group `()` is an `InvalidExpression`.
///
/// # Errors
/// - `ErrorKind::MismatchedParentheses` if the input ends before `)`.
/// - `ErrorKind::InvalidExpression` if anything other than `)` follows the
///   inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let inner = parse_expression(tokens, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((token, offset)) => {
            debug!(offset, ?token, "expected ')'");
            Err(ErrorKind::InvalidExpression)
        },
        None => Err(ErrorKind::MismatchedParentheses),
    }
}

use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{ADDITIVE, Expr},
    error::ErrorKind,
    interpreter::{
        lexer::{Spanned, Token},
        parser::binary::parse_binary,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ErrorKind>;

/// Deepest nesting of parentheses and unary minus the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Parses a complete token sequence into an expression tree.
///
/// Parenthesis balance is checked over the whole sequence first, so an
/// unbalanced input is always reported as `MismatchedParentheses` even when
/// it is malformed in other ways too. The grammar must then consume every
/// token.
///
/// # Errors
/// - `ErrorKind::MismatchedParentheses` for an unmatched `(` or `)`.
/// - `ErrorKind::InvalidExpression` for anything the grammar cannot reduce,
///   including the empty sequence and trailing tokens.
///
/// # Example
/// ```
/// use calculon::{
///     error::ErrorKind,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tree = parse(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tokens = tokenize("2 3").unwrap();
/// assert_eq!(parse(&tokens), Err(ErrorKind::InvalidExpression));
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    check_parentheses(tokens)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, offset)) = iter.next() {
        debug!(offset, ?token, "unexpected trailing token");
        return Err(ErrorKind::InvalidExpression);
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition, and climbs from there.
///
/// Grammar: `expression := sum`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Current nesting of groups and unary minus.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_binary(tokens, ADDITIVE, depth)
}

/// Verifies that every `)` closes an earlier `(` and that no `(` is left
/// open.
///
/// # Errors
/// Returns `ErrorKind::MismatchedParentheses` at the first `)` with nothing to
/// close, or at the end of input when a `(` is still open.
pub fn check_parentheses(tokens: &[Spanned]) -> ParseResult<()> {
    let mut open: Vec<usize> = Vec::new();

    for (token, offset) in tokens {
        match token {
            Token::LParen => open.push(*offset),
            Token::RParen => {
                if open.pop().is_none() {
                    debug!(offset, "unmatched closing parenthesis");
                    return Err(ErrorKind::MismatchedParentheses);
                }
            },
            _ => {},
        }
    }

    if let Some(offset) = open.last() {
        debug!(offset, "unclosed parenthesis");
        return Err(ErrorKind::MismatchedParentheses);
    }

    Ok(())
}

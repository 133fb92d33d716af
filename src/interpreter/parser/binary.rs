use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a chain of binary operations by precedence climbing.
///
/// Reads an operand, then keeps folding `op operand` pairs into the tree for
/// as long as the next operator binds at least as tightly as
/// `min_precedence`. The right operand of each operator is parsed one level
/// higher, which makes every operator left-associative: `8 - 3 - 2` parses as
/// `(8 - 3) - 2`.
///
/// Called with [`ADDITIVE`](crate::ast::ADDITIVE) this implements
///
/// ```text
///     sum     := product (("+" | "-") product)*
///     product := unary   (("*" | "/") unary)*
/// ```
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `min_precedence`: Weakest operator this call may consume.
/// - `depth`: Current nesting of groups and unary minus.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the lone operand if no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.precedence() >= min_precedence
        {
            let offset = *offset;
            tokens.next();
            let right = parse_binary(tokens, op.precedence() + 1, depth)?;
            left = Expr::binary(left, op, right, offset);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use calculon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) | Token::LParen | Token::RParen => None,
    }
}

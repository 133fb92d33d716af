use logos::{Lexer, Logos};
use tracing::{debug, trace};

use crate::error::ErrorKind;

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Represents a lexical token in an arithmetic expression.
///
/// Only numbers, the four operators and parentheses exist. A `-` is always
/// lexed as [`Token::Minus`]; whether it negates or subtracts is decided by
/// the parser.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ErrorKind)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+", parse_number)]
    #[regex(r"[0-9.]+[A-Za-z_][0-9A-Za-z_.]*", reject_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a run of digits and decimal points into a number.
///
/// The run must contain at least one digit and at most one decimal point, and
/// its value must be finite.
///
/// # Errors
/// Returns `ErrorKind::InvalidNumber` for runs such as `1.2.3` or `.`, and for
/// literals too large for an `f64`.
fn parse_number(lex: &mut Lexer<Token>) -> Result<f64, ErrorKind> {
    let slice = lex.slice();
    let points = slice.bytes().filter(|&b| b == b'.').count();

    if points > 1 || points == slice.len() {
        return Err(ErrorKind::InvalidNumber);
    }

    let value: f64 = slice.parse().map_err(|_| ErrorKind::InvalidNumber)?;
    if value.is_finite() { Ok(value) } else { Err(ErrorKind::InvalidNumber) }
}

/// Rejects a numeric run glued to letters, such as `3x` or `12abc`.
fn reject_number(_lex: &mut Lexer<Token>) -> Result<f64, ErrorKind> {
    Err(ErrorKind::InvalidNumber)
}

/// Converts an expression string into tokens.
///
/// Scans left to right, skipping whitespace, and stops at the first input it
/// cannot turn into a token.
///
/// # Errors
/// - `ErrorKind::InvalidNumber` for a malformed numeric literal.
/// - `ErrorKind::InvalidCharacter` for any character that is not a digit,
///   `.`, one of `+-*/()`, or whitespace.
///
/// # Example
/// ```
/// use calculon::{
///     error::ErrorKind,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("2 * (3.5)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Star, 2),
///                 (Token::LParen, 4),
///                 (Token::Number(3.5), 5),
///                 (Token::RParen, 8)]);
///
/// assert_eq!(tokenize("1 % 2"), Err(ErrorKind::InvalidCharacter));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ErrorKind> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(kind) => {
                debug!(offset = lexer.span().start,
                       slice = lexer.slice(),
                       %kind,
                       "tokenizer rejected input");
                return Err(kind);
            },
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

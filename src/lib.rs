//! # calculon
//!
//! calculon is an arithmetic expression engine written in Rust.
//! It tokenizes, parses, and evaluates a single expression over real numbers
//! with `+`, `-`, `*`, `/` and parentheses, and classifies every failure into
//! one of five [`ErrorKind`]s.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator type that represent
/// an expression as a tree. The tree is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Defines operator precedence.
/// - Attaches source offsets to nodes for diagnostics.
pub mod ast;
/// Provides the error taxonomy shared by every stage.
///
/// # Responsibilities
/// - Defines the closed set of failure kinds.
/// - Maps each kind to its user-facing message and status code.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Exposes each stage of the pipeline on its own.
/// - Keeps stages pure: no stage holds state between calls.
pub mod interpreter;
/// Renders calculation outcomes for callers.
///
/// This module turns a result or an error into the message, status code and
/// JSON body a front end hands back to its user.
pub mod report;

pub use error::ErrorKind;

/// Calculates the value of an arithmetic expression.
///
/// Runs the tokenizer, the parser and the evaluator in order. The first
/// stage that fails stops the pipeline and its error is returned unchanged.
/// The function keeps no state, so concurrent calls are independent.
///
/// # Errors
/// Returns the [`ErrorKind`] of the first failing stage.
///
/// # Examples
/// ```
/// use calculon::{ErrorKind, calculate};
///
/// assert_eq!(calculate("2 * (3 + 4) - 5"), Ok(9.0));
/// assert_eq!(calculate("2 + 3 * 4"), Ok(14.0));
///
/// assert_eq!(calculate("10 / 0"), Err(ErrorKind::DivisionByZero));
/// assert_eq!(calculate("(2 + 3"), Err(ErrorKind::MismatchedParentheses));
/// ```
pub fn calculate(expression: &str) -> Result<f64, ErrorKind> {
    let outcome = tokenize(expression).and_then(|tokens| parse(&tokens))
                                      .and_then(|tree| evaluate(&tree));

    debug!(expression, ?outcome, "calculated");
    outcome
}

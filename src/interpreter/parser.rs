/// Parser entry point.
///
/// Checks parenthesis balance, drives the grammar, and rejects leftover
/// tokens.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over `+`, `-`, `*` and `/`.
pub mod binary;

/// Operand parsing.
///
/// Handles numbers, parenthesised groups and unary minus.
pub mod unary;

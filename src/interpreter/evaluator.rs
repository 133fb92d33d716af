/// Core evaluation logic.
///
/// Walks the expression tree in post-order and propagates the first failure.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two already evaluated operands.
pub mod binary;

use tracing::debug;

use crate::{ast::BinaryOperator, error::ErrorKind, interpreter::evaluator::core::EvalResult};

/// Evaluates a scalar arithmetic operation.
///
/// `+`, `-` and `*` follow IEEE 754 and never fail. Division is checked
/// explicitly: a right operand equal to zero (either sign) is rejected
/// whatever the left operand is, so `0 / 0` is a division by zero rather than
/// `NaN`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Source offset of the operator, for diagnostics.
///
/// # Errors
/// Returns `ErrorKind::DivisionByZero` for `x / 0`.
///
/// # Example
/// ```
/// use calculon::{
///     ast::BinaryOperator,
///     error::ErrorKind,
///     interpreter::evaluator::binary::eval_scalar_op,
/// };
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, 9.0, 2.0, 0), Ok(4.5));
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, 0.0, -0.0, 0),
///            Err(ErrorKind::DivisionByZero));
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64, offset: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   debug!(offset, left, "division by zero");
                   return Err(ErrorKind::DivisionByZero);
               }
               left / right
           },
       })
}

use crate::{ast::Expr, error::ErrorKind, interpreter::evaluator::binary::eval_scalar_op};

/// Result type used by the evaluator.
///
/// Evaluation of a parsed tree can only fail with `ErrorKind::DivisionByZero`.
pub type EvalResult<T> = Result<T, ErrorKind>;

/// Evaluates an expression tree to a single number.
///
/// Both operands of a binary operation are evaluated, left first, before the
/// operator is applied. The tree is only read.
///
/// Operator chains such as `1 + 2 + ... + n` parse into a left-deep tree, so
/// the left spine is walked with an explicit stack and only right operands
/// are evaluated recursively. The parser bounds how deep right operands
/// nest.
///
/// # Errors
/// Returns `ErrorKind::DivisionByZero` if any division in the tree has a
/// right operand that evaluates to zero.
///
/// # Example
/// ```
/// use calculon::{
///     ast::{BinaryOperator, Expr},
///     error::ErrorKind,
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = Expr::binary(Expr::literal(7.0, 0), BinaryOperator::Mul, Expr::literal(6.0, 4), 2);
/// assert_eq!(evaluate(&tree), Ok(42.0));
///
/// let tree = Expr::binary(Expr::literal(1.0, 0), BinaryOperator::Div, Expr::literal(0.0, 4), 2);
/// assert_eq!(evaluate(&tree), Err(ErrorKind::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let mut spine = Vec::new();
    let mut node = expr;

    let mut value = loop {
        match node {
            Expr::Literal { value, .. } => break *value,
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => {
                spine.push((*op, right.as_ref(), *offset));
                node = left.as_ref();
            },
        }
    };

    while let Some((op, right, offset)) = spine.pop() {
        let right = evaluate(right)?;
        value = eval_scalar_op(op, value, right, offset)?;
    }

    Ok(value)
}

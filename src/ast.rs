use std::{fmt, mem};

/// Binding strength of `+` and `-`.
pub const ADDITIVE: u8 = 1;
/// Binding strength of `*` and `/`.
pub const MULTIPLICATIVE: u8 = 2;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// A tree is either a single literal or a binary operation whose two operands
/// are owned exclusively by the node. Unary minus has no node of its own: the
/// parser rewrites `-x` as `0 - x`.
///
/// Every node remembers the byte offset in the source where it starts (for a
/// binary operation, the offset of its operator) so failures can be traced
/// back to the input.
///
/// Long operator chains make deep trees, so comparing, displaying and
/// dropping a tree all walk it with an explicit stack.
#[derive(Debug)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The decoded value.
        value:  f64,
        /// Byte offset of the literal in the source.
        offset: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator in the source.
        offset: usize,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64, offset: usize) -> Self {
        Self::Literal { value, offset }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, offset: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         offset }
    }

    /// Builds the tree for unary minus applied to `operand`, which is
    /// `0 - operand`.
    ///
    /// `offset` is the position of the `-` sign; it is used for both the
    /// synthesized zero and the subtraction.
    ///
    /// ## Example
    /// ```
    /// use calculon::ast::{BinaryOperator, Expr};
    ///
    /// let negated = Expr::negation(Expr::literal(3.0, 1), 0);
    /// assert_eq!(negated,
    ///            Expr::binary(Expr::literal(0.0, 0),
    ///                         BinaryOperator::Sub,
    ///                         Expr::literal(3.0, 1),
    ///                         0));
    /// ```
    #[must_use]
    pub fn negation(operand: Self, offset: usize) -> Self {
        Self::binary(Self::literal(0.0, offset), BinaryOperator::Sub, operand, offset)
    }

    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use calculon::ast::Expr;
    ///
    /// assert_eq!(Expr::literal(1.5, 4).offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. } | Self::BinaryOp { offset, .. } => *offset,
        }
    }
}

/// One step of rendering a tree.
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesised, so grouping is explicit:
    /// `2 + 3 * 4` displays as `(2 + (3 * 4))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

impl PartialEq for Expr {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Literal { value: a,
                                 offset: x, },
                 Self::Literal { value: b,
                                 offset: y, }) => {
                    if a != b || x != y {
                        return false;
                    }
                },
                (Self::BinaryOp { left: left_a,
                                  op: op_a,
                                  right: right_a,
                                  offset: x, },
                 Self::BinaryOp { left: left_b,
                                  op: op_b,
                                  right: right_b,
                                  offset: y, }) => {
                    if op_a != op_b || x != y {
                        return false;
                    }
                    pending.push((right_a.as_ref(), right_b.as_ref()));
                    pending.push((left_a.as_ref(), left_b.as_ref()));
                },
                _ => return false,
            }
        }

        true
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_subtrees(self, &mut pending);

        // Each popped node has only literal children left, so its own drop
        // does no further work.
        while let Some(mut node) = pending.pop() {
            detach_subtrees(&mut node, &mut pending);
        }
    }
}

/// Moves the operation children of `node` onto `pending`, leaving literals
/// in their place.
fn detach_subtrees(node: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, .. } = node {
        for child in [left, right] {
            if matches!(**child, Expr::BinaryOp { .. }) {
                pending.push(mem::replace(&mut **child, Expr::literal(0.0, 0)));
            }
        }
    }
}

/// Supported binary operators.
///
/// All four are left-associative. `Add`/`Sub` bind with [`ADDITIVE`]
/// strength, `Mul`/`Div` with [`MULTIPLICATIVE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of this operator; higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use calculon::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => ADDITIVE,
            Self::Mul | Self::Div => MULTIPLICATIVE,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

use thiserror::Error;

/// Represents every way a calculation can fail.
///
/// The variants are listed in the order the pipeline can raise them: the
/// tokenizer produces `InvalidCharacter` and `InvalidNumber`, the parser
/// `MismatchedParentheses` and `InvalidExpression`, and the evaluator only
/// `DivisionByZero`.
///
/// `InvalidCharacter` is the [`Default`] because the lexer reports any input it
/// cannot match with the default error value.
#[derive(Error, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside digits, `.`, `+-*/()` and whitespace.
    #[default]
    #[error("invalid character")]
    InvalidCharacter,
    /// A lexically malformed numeric literal, such as `1.2.3` or `3x`.
    #[error("invalid number")]
    InvalidNumber,
    /// An unmatched `(` or `)`.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// A token sequence that does not form a complete expression.
    #[error("invalid expression")]
    InvalidExpression,
    /// A division whose right operand evaluates to zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl ErrorKind {
    /// Every error kind, in pipeline order.
    pub const ALL: [Self; 5] = [Self::InvalidCharacter,
                                Self::InvalidNumber,
                                Self::MismatchedParentheses,
                                Self::InvalidExpression,
                                Self::DivisionByZero];

    /// Returns the user-facing message for this kind.
    ///
    /// Each kind has a distinct message.
    ///
    /// # Example
    /// ```
    /// use calculon::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::DivisionByZero.message(), "Division by zero");
    /// assert_eq!(ErrorKind::InvalidCharacter.message(),
    ///            "Invalid character in expression");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidExpression => "Invalid expression",
            Self::DivisionByZero => "Division by zero",
            Self::MismatchedParentheses => "Mismatched parentheses",
            Self::InvalidCharacter => "Invalid character in expression",
            Self::InvalidNumber => "Invalid number format",
        }
    }

    /// Returns the status code reported for this kind.
    ///
    /// Every kind describes a problem with the submitted expression, never a
    /// fault of the engine, so all of them map to `422 Unprocessable Entity`.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::InvalidExpression
            | Self::DivisionByZero
            | Self::MismatchedParentheses
            | Self::InvalidCharacter
            | Self::InvalidNumber => 422,
        }
    }
}

/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the expression tree in post-order and combines
/// operands with their operators. It can only fail on division by zero.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Rejects any division whose divisor evaluates to zero.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer reads the raw expression text and produces a flat stream of
/// tokens: numbers, the four arithmetic operators, and parentheses. This is
/// the first stage of a calculation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with their source offsets.
/// - Decodes numeric literals.
/// - Reports invalid characters and malformed numbers.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// a tree that encodes operator precedence, associativity and grouping.
///
/// # Responsibilities
/// - Checks that parentheses are balanced.
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes, folding unary
///   minus into `0 - x`.
/// - Rejects token sequences that do not form exactly one expression.
pub mod parser;

/// The closed set of calculation failures.
///
/// Every stage of the engine (tokenizer, parser, evaluator) fails with exactly
/// one of these kinds. Kinds carry no payload and never wrap another error.
pub mod kind;

pub use kind::ErrorKind;

/// Tokenization and parsing errors.
///
/// Defines all error types that can occur before evaluation: unrecognized
/// characters found while scanning, unmatched parentheses found while
/// reordering tokens, and empty input rejected by the pipeline entry point.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a postfix
/// sequence. Evaluation errors include division or modulo by zero, operators
/// with missing operands, literals that fail numeric conversion, and
/// sequences that do not reduce to a single value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

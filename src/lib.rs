//! # numeval
//!
//! numeval is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates a single expression over
//! floating-point numbers, supporting six binary operators, unary negation
//! and parenthesized grouping.

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

use crate::{
    error::ParseError,
    pipeline::{evaluator::evaluate, parser::parse, tokenizer::tokenize},
};

/// Provides unified error types for tokenization, parsing and evaluation.
///
/// This module defines all errors that can be raised by any pipeline stage.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, the offending text and byte offsets into
/// the source for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser,
///   evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Collects evaluated expressions and their outcomes.
///
/// This module provides the evaluation history: an ordered log of
/// expression/outcome pairs appended to after each evaluation. The log is
/// owned by the caller, which keeps the pipeline itself free of state.
///
/// # Responsibilities
/// - Stores `(expression, outcome)` pairs in arrival order.
/// - Renders pipeline results into outcome text on request.
pub mod history;
/// Orchestrates the three stages that turn text into a number.
///
/// This module ties together tokenization, parsing and evaluation. Each
/// stage consumes the previous stage's output and can fail independently,
/// short-circuiting the pipeline with a typed error.
///
/// # Responsibilities
/// - Coordinates the core components: tokenizer, parser and evaluator.
/// - Exposes each stage as a standalone, reentrant function.
/// - Manages the flow of data and errors between phases.
pub mod pipeline;
/// Defines the token model shared by every pipeline stage.
///
/// This module declares the `Token` and `Operator` types that represent
/// classified units of the source text. Tokens are produced by the
/// tokenizer, reordered by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines token kinds for numbers, operators and parentheses.
/// - Carries operator precedence and arity used during parsing and
///   evaluation.
pub mod token;

/// Evaluates an arithmetic expression and returns the resulting number.
///
/// This function runs the full pipeline: the source is tokenized, the tokens
/// are reordered into postfix form, and the postfix sequence is evaluated
/// with a value stack. A failure in any stage stops the pipeline and is
/// returned as that stage's error; later stages never run.
///
/// Input with no tokens at all (empty or whitespace-only text) is rejected
/// before parsing, so an empty postfix sequence can only arise from an
/// expression like `()` and is reported by the evaluator instead.
///
/// # Errors
/// Returns the failing stage's [`ParseError`] or
/// [`RuntimeError`](error::RuntimeError), boxed. Callers that need to branch
/// on the failure kind can downcast the box to either type.
///
/// # Examples
/// ```
/// use numeval::evaluate_expression;
///
/// assert_eq!(evaluate_expression("3 + 4 * 2").unwrap(), 11.0);
/// assert_eq!(evaluate_expression("(4 + 5) / 2").unwrap(), 4.5);
///
/// // Failures are typed errors, never a silent infinity or NaN.
/// assert!(evaluate_expression("5 / 0").is_err());
/// assert!(evaluate_expression("3 @ 4").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    if tokens.is_empty() {
        return Err(Box::new(ParseError::EmptyExpression));
    }

    let postfix = parse(&tokens)?;

    Ok(evaluate(&postfix)?)
}

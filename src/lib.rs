//! # prefixa
//!
//! prefixa is a small infix calculator written in Rust.
//! It tokenizes an arithmetic expression, disambiguates unary minus, rewrites
//! the expression into prefix notation, and evaluates it with 8-bit
//! two's-complement arithmetic, signaling overflow without aborting.

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

use crate::interpreter::{
    evaluator::{self, Overflow},
    lexer::{self, Token},
    prefix::{self, prefix_notation},
    unary,
};

/// Provides the error type returned by evaluation.
///
/// This module defines the errors that can be raised while evaluating a
/// prefix token sequence. Each error renders as a fixed, user-facing string.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering all evaluation failure modes.
/// - Supplies the exact report strings via `Display`.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the expression-processing pipeline.
///
/// This module ties together the tokenizer, the unary-minus resolver, the
/// infix-to-prefix converter, and the prefix evaluator. Data flows strictly
/// forward through the four stages; no stage depends on a later one.
///
/// # Responsibilities
/// - Declares the four pipeline stages as submodules.
/// - Provides the token type shared by every stage.
/// - Manages the flow of token sequences between stages.
pub mod interpreter;

pub use crate::error::EvalError;

/// The outcome of running the pipeline on one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The expression rewritten in prefix order.
    pub prefix: Vec<Token>,
    /// The evaluated 8-bit result, or the evaluation error.
    pub result: Result<i8, EvalError>,
}

impl Evaluation {
    /// Returns the prefix token sequence joined by single spaces.
    #[must_use]
    pub fn prefix_notation(&self) -> String {
        prefix_notation(&self.prefix)
    }
}

/// Rewrites one infix expression into prefix order.
///
/// Runs the first three pipeline stages: tokenization, unary-minus
/// resolution, and infix-to-prefix conversion. The input is not validated;
/// unbalanced or otherwise malformed expressions produce a malformed prefix
/// sequence that surfaces as an error during evaluation.
///
/// # Parameters
/// - `source`: One expression line.
///
/// # Returns
/// The expression's tokens in prefix order.
///
/// # Examples
/// ```
/// use prefixa::{interpreter::prefix::prefix_notation, to_prefix};
///
/// let tokens = to_prefix("5-3");
/// assert_eq!(prefix_notation(&tokens), "- 5 3");
///
/// // The leading minus is unary and becomes the `^` marker.
/// let tokens = to_prefix("-5+3");
/// assert_eq!(prefix_notation(&tokens), "+ ^ 5 3");
/// ```
#[must_use]
pub fn to_prefix(source: &str) -> Vec<Token> {
    let tokens = lexer::tokenize(source);
    let resolved = unary::resolve_unary(&tokens);
    prefix::infix_to_prefix(&resolved)
}

/// Runs the full pipeline on one expression.
///
/// Converts the expression to prefix order, evaluates it with 8-bit
/// two's-complement arithmetic, and reports every overflow through the
/// supplied sink the moment it occurs. Processing is stateless: calling this
/// function twice on the same input yields the same outcome.
///
/// # Parameters
/// - `source`: One expression line.
/// - `on_overflow`: Sink invoked once per overflow notice.
///
/// # Returns
/// An [`Evaluation`] holding the prefix token sequence and the result.
///
/// # Examples
/// ```
/// use prefixa::evaluate_expression;
///
/// let evaluation = evaluate_expression("(2+3)*4", |_| {});
/// assert_eq!(evaluation.result, Ok(20));
///
/// // 4*32 wraps to -128 and signals overflow once.
/// let mut notices = 0;
/// let evaluation = evaluate_expression("4*32", |_| notices += 1);
/// assert_eq!(evaluation.result, Ok(-128));
/// assert_eq!(notices, 1);
/// ```
pub fn evaluate_expression(source: &str, on_overflow: impl FnMut(Overflow)) -> Evaluation {
    let prefix = to_prefix(source);
    let result = evaluator::evaluate_prefix(&prefix, on_overflow);
    Evaluation { prefix, result }
}

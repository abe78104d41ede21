//! # reckon
//!
//! reckon is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression and reduces it with the shunting-yard algorithm,
//! supporting `+ - * /`, parentheses, decimal numbers and unary minus.

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
    error::EvalError,
    interpreter::{
        evaluator::core::{self as evaluator, EvalResult},
        lexer::{strip_spaces, tokenize},
    },
};

/// Provides the error types for tokenizing and evaluating.
///
/// This module defines every error an evaluation can end with. Each error is
/// detected where it arises and returned immediately; there is no recovery
/// and no partial result.
///
/// # Responsibilities
/// - Defines the tokenizer's [`error::TokenError`].
/// - Defines [`error::EvalError`], the single error type of [`evaluate`].
/// - Carries the offending character or numeral for diagnostics.
pub mod error;
/// Contains the two evaluation stages.
///
/// The interpreter turns expression text into tokens and reduces the tokens
/// to a number.
///
/// # Responsibilities
/// - Tokenizes text into numbers, operators and parentheses.
/// - Evaluates tokens with operand and operator stacks.
pub mod interpreter;
/// A line-oriented calculator session.
///
/// Reads expressions line by line, evaluates them and prints results or
/// errors until end of input or a quit command.
pub mod repl;
/// General helpers for presenting numbers.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// Every space character is removed first; tabs and line breaks are not, and
/// are rejected as invalid tokens. The remaining text is tokenized and then
/// evaluated. Each call is independent of every other call.
///
/// # Errors
/// - [`EvalError::InvalidExpression`] for empty input, unbalanced
///   parentheses, or operators and operands that do not line up.
/// - [`EvalError::DivisionByZero`] when anything is divided by zero.
/// - [`EvalError::InvalidToken`] for unknown characters and malformed
///   numerals.
///
/// # Examples
/// ```
/// use reckon::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("3 + 4 * 2 / (1 - 5)").unwrap(), 1.0);
/// assert_eq!(evaluate("-3+4").unwrap(), 1.0);
///
/// assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(evaluate("(2+3"), Err(EvalError::InvalidExpression { .. })));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let expression = strip_spaces(expression);
    if expression.is_empty() {
        return Err(EvalError::invalid_expression("empty expression"));
    }

    let tokens = tokenize(&expression)?;
    evaluator::evaluate(&tokens)
}

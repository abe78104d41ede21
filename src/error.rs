/// Tokenizer errors.
///
/// Defines the errors raised while turning raw text into tokens: characters
/// outside the calculator's alphabet and numerals carrying more than one
/// decimal point.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains every error an evaluation can end with. Tokenizer errors convert
/// into [`EvalError::InvalidToken`], so callers of [`crate::evaluate`] only
/// ever handle this one type.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::TokenError;

use crate::error::TokenError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can end an evaluation.
///
/// Every error is terminal: evaluation stops at the point of detection and no
/// partial result is produced.
pub enum EvalError {
    /// The expression is empty, its operands and operators do not line up, or
    /// its parentheses are unbalanced.
    InvalidExpression {
        /// What exactly was wrong with the expression.
        details: &'static str,
    },
    /// A division had a zero right-hand operand.
    DivisionByZero,
    /// A reduction was asked to apply a symbol that is not `+ - * /`.
    InvalidOperator {
        /// The unsupported symbol.
        operator: char,
    },
    /// A character or numeral could not be turned into a value.
    InvalidToken {
        /// The offending text.
        token:   String,
        /// Why the text was rejected, when more is known than its presence.
        details: Option<&'static str>,
    },
}

impl EvalError {
    /// Shorthand for [`EvalError::InvalidExpression`].
    #[must_use]
    pub const fn invalid_expression(details: &'static str) -> Self {
        Self::InvalidExpression { details }
    }

    /// Shorthand for an [`EvalError::InvalidToken`] without further details.
    #[must_use]
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken { token:   token.into(),
                             details: None, }
    }
}

impl From<TokenError> for EvalError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::UnexpectedCharacter { character } => {
                Self::invalid_token(character)
            },
            TokenError::MultipleDecimalPoints { numeral } => {
                Self::InvalidToken { token:   numeral,
                                     details: Some("multiple decimal points") }
            },
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { details } => write!(f, "invalid expression: {details}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidOperator { operator } => write!(f, "invalid operator: '{operator}'"),
            Self::InvalidToken { token, details: None } => {
                write!(f, "invalid token in expression: '{token}'")
            },
            Self::InvalidToken { token,
                                 details: Some(details), } => {
                write!(f, "invalid token in expression: {details} in '{token}'")
            },
        }
    }
}

impl std::error::Error for EvalError {}

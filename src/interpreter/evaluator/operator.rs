use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// All operators are left-associative, so an operator already on the
    /// stack is reduced when its precedence is greater than *or equal to* the
    /// incoming one.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator as `left op right`.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::EvalError, interpreter::evaluator::operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(1.0, 5.0), Ok(-4.0));
    /// assert_eq!(BinaryOperator::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = EvalError;

    fn try_from(symbol: char) -> EvalResult<Self> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            operator => Err(EvalError::InvalidOperator { operator }),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Precedence of an operator symbol, `0` for symbols that are not operators.
#[must_use]
pub fn precedence(symbol: char) -> u8 {
    BinaryOperator::try_from(symbol).map_or(0, BinaryOperator::precedence)
}

/// Applies the operator named by `symbol` to `left` and `right`.
///
/// # Errors
/// - [`EvalError::InvalidOperator`] if `symbol` is not one of `+ - * /`.
/// - [`EvalError::DivisionByZero`] for a division by zero.
pub fn apply_operator(symbol: char, left: f64, right: f64) -> EvalResult<f64> {
    BinaryOperator::try_from(symbol)?.apply(left, right)
}

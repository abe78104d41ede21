use crate::{
    error::EvalError,
    interpreter::{
        evaluator::operator::{apply_operator, precedence},
        lexer::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An operator waiting for its right operand to be complete.
    Operator(char),
    /// An open parenthesis marker.
    LeftParen,
}

/// The two stacks of a shunting-yard evaluation.
///
/// A `Machine` lives for exactly one call of [`evaluate`]; nothing is shared
/// between calls.
#[derive(Debug, Default)]
struct Machine {
    operands:  Vec<f64>,
    operators: Vec<Pending>,
}

impl Machine {
    fn feed(&mut self, token: &Token) -> EvalResult<()> {
        match token {
            Token::Number(text) => {
                let value = text.parse::<f64>()
                                .map_err(|_| EvalError::invalid_token(text.as_str()))?;
                if !value.is_finite() {
                    return Err(EvalError::InvalidToken { token:   text.clone(),
                                                         details: Some("out of range") });
                }
                self.operands.push(value);
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = self.operators.last()
                      && precedence(top) >= precedence(*op)
                {
                    self.operators.pop();
                    self.reduce(top)?;
                }
                self.operators.push(Pending::Operator(*op));
            },
            Token::LeftParen => self.operators.push(Pending::LeftParen),
            Token::RightParen => loop {
                match self.operators.pop() {
                    Some(Pending::Operator(top)) => self.reduce(top)?,
                    Some(Pending::LeftParen) => break,
                    None => return Err(EvalError::invalid_expression("unbalanced parentheses")),
                }
            },
        }
        Ok(())
    }

    /// Pops two operands, applies `op` and pushes the result back.
    fn reduce(&mut self, op: char) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::invalid_expression("missing operand"));
        };
        self.operands.push(apply_operator(op, left, right)?);
        Ok(())
    }

    /// Reduces every pending operator and returns the single remaining value.
    fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.reduce(op)?,
                Pending::LeftParen => {
                    return Err(EvalError::invalid_expression("unbalanced parentheses"));
                },
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::invalid_expression("missing operand")),
            _ => Err(EvalError::invalid_expression("missing operator")),
        }
    }
}

/// Evaluates a token sequence with the two-stack shunting-yard algorithm.
///
/// Numbers are pushed on the operand stack. An incoming operator first
/// reduces every stacked operator of greater or equal precedence, which makes
/// all operators left-associative. A closing parenthesis reduces back to its
/// matching opening one. Whatever is left on the operator stack at the end is
/// reduced in turn, after which exactly one operand must remain.
///
/// # Errors
/// - [`EvalError::InvalidToken`] if a number token is not a valid numeral or
///   is too large to be represented.
/// - [`EvalError::InvalidExpression`] for unbalanced parentheses, operators
///   without two operands, or operands without an operator between them.
/// - [`EvalError::DivisionByZero`] for a division by zero anywhere.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::core::evaluate, lexer::tokenize};
///
/// let tokens = tokenize("3+4*2/(1-5)").unwrap();
/// assert_eq!(evaluate(&tokens).unwrap(), 1.0);
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut machine = Machine::default();
    for token in tokens {
        machine.feed(token)?;
    }
    machine.finish()
}

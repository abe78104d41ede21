#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum TokenError {
    /// Found a character that is not a digit, `.`, an operator or a
    /// parenthesis.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// A numeral contained a second decimal point.
    MultipleDecimalPoints {
        /// The numeral scanned so far, including the rejected point.
        numeral: String,
    },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character } => {
                write!(f, "invalid token in expression: '{character}'")
            },
            Self::MultipleDecimalPoints { numeral } => {
                write!(f,
                       "invalid token in expression: multiple decimal points in '{numeral}'")
            },
        }
    }
}

impl std::error::Error for TokenError {}

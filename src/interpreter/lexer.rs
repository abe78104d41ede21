use logos::Logos;

use crate::error::TokenError;

/// A raw lexical class recognized in whitespace-free input.
///
/// Symbols are the building blocks the tokenizer assembles into [`Token`]s.
/// Digits and decimal points are kept apart so the tokenizer can police the
/// number of points per numeral and fold a leading sign into it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// A run of ASCII digits, such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Symbol {
    /// Returns the operator character for `+ - * /`, `None` otherwise.
    #[must_use]
    pub const fn operator(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Digits | Self::Dot | Self::LParen | Self::RParen => None,
        }
    }

    /// Whether a `-` directly after this symbol is a sign rather than a
    /// subtraction.
    const fn precedes_sign(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::LParen)
    }
}

/// A token of an arithmetic expression.
///
/// Numbers keep their source text until the evaluator parses them, which is
/// where a lone sign such as `-` is finally rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A numeral with an optional leading `-` and at most one decimal point.
    Number(String),
    /// One of `+ - * /`.
    Operator(char),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// The numeral being accumulated by the tokenizer.
#[derive(Default)]
struct Numeral {
    text:        String,
    has_decimal: bool,
}

impl Numeral {
    fn push_digits(&mut self, digits: &str) {
        self.text.push_str(digits);
    }

    fn push_sign(&mut self) {
        self.text.push('-');
    }

    fn push_point(&mut self) -> Result<(), TokenError> {
        self.text.push('.');
        if self.has_decimal {
            return Err(TokenError::MultipleDecimalPoints { numeral: std::mem::take(&mut self.text) });
        }
        self.has_decimal = true;
        Ok(())
    }

    /// Emits the pending numeral, if any, and starts a fresh one.
    fn flush_into(&mut self, tokens: &mut Vec<Token>) {
        if !self.text.is_empty() {
            tokens.push(Token::Number(std::mem::take(&mut self.text)));
            self.has_decimal = false;
        }
    }
}

/// Removes every space character from `text`.
///
/// Only `' '` is removed; tabs and line breaks are left in place and later
/// rejected by [`tokenize`].
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::strip_spaces;
///
/// assert_eq!(strip_spaces(" 3 + 4 * 2 "), "3+4*2");
/// assert_eq!(strip_spaces("1\t+ 2"), "1\t+2");
/// ```
#[must_use]
pub fn strip_spaces(text: &str) -> String {
    text.replace(' ', "")
}

/// Converts whitespace-free text into a sequence of tokens.
///
/// The scan is a single left-to-right pass. Digits and decimal points
/// accumulate into a numeral that is flushed whenever an operator or a
/// parenthesis is met, and once more at the end of the input. A `-` that is
/// the first character, or that follows an operator or `(`, starts a signed
/// numeral instead of producing an operator token.
///
/// # Errors
/// - [`TokenError::UnexpectedCharacter`] for anything other than digits, `.`,
///   `+ - * /`, `(` and `)`.
/// - [`TokenError::MultipleDecimalPoints`] when a numeral holds a second `.`.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-3+(4)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("-3".into()),
///                 Token::Operator('+'),
///                 Token::LeftParen,
///                 Token::Number("4".into()),
///                 Token::RightParen]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();
    let mut numeral = Numeral::default();
    let mut previous: Option<Symbol> = None;
    let mut lexer = Symbol::lexer(text);

    while let Some(symbol) = lexer.next() {
        let Ok(symbol) = symbol else {
            let character = text[lexer.span().start..].chars()
                                                      .next()
                                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(TokenError::UnexpectedCharacter { character });
        };

        match symbol {
            Symbol::Digits => numeral.push_digits(lexer.slice()),
            Symbol::Dot => numeral.push_point()?,
            Symbol::LParen => {
                numeral.flush_into(&mut tokens);
                tokens.push(Token::LeftParen);
            },
            Symbol::RParen => {
                numeral.flush_into(&mut tokens);
                tokens.push(Token::RightParen);
            },
            Symbol::Plus | Symbol::Minus | Symbol::Star | Symbol::Slash => {
                numeral.flush_into(&mut tokens);
                if symbol == Symbol::Minus && previous.is_none_or(Symbol::precedes_sign) {
                    numeral.push_sign();
                } else if let Some(op) = symbol.operator() {
                    tokens.push(Token::Operator(op));
                }
            },
        }

        previous = Some(symbol);
    }

    numeral.flush_into(&mut tokens);
    Ok(tokens)
}

use reckon::{
    error::TokenError,
    interpreter::{
        evaluator::{
            core::evaluate,
            operator::{BinaryOperator, apply_operator, precedence},
        },
        lexer::{Token, strip_spaces, tokenize},
    },
};

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn numbers_operators_and_parentheses() {
    assert_eq!(tokenize("12.5*(3-40)").unwrap(),
               vec![number("12.5"),
                    Token::Operator('*'),
                    Token::LeftParen,
                    number("3"),
                    Token::Operator('-'),
                    number("40"),
                    Token::RightParen]);
}

#[test]
fn leading_minus_is_a_sign() {
    assert_eq!(tokenize("-3+4").unwrap(),
               vec![number("-3"), Token::Operator('+'), number("4")]);
}

#[test]
fn minus_after_operator_or_paren_is_a_sign() {
    assert_eq!(tokenize("2*-3").unwrap(),
               vec![number("2"), Token::Operator('*'), number("-3")]);
    assert_eq!(tokenize("(-1)").unwrap(),
               vec![Token::LeftParen, number("-1"), Token::RightParen]);
    assert_eq!(tokenize("3--2").unwrap(),
               vec![number("3"), Token::Operator('-'), number("-2")]);
}

#[test]
fn minus_after_number_or_close_paren_is_an_operator() {
    assert_eq!(tokenize("5-1").unwrap(),
               vec![number("5"), Token::Operator('-'), number("1")]);
    assert_eq!(tokenize("(5)-1").unwrap(),
               vec![Token::LeftParen,
                    number("5"),
                    Token::RightParen,
                    Token::Operator('-'),
                    number("1")]);
}

#[test]
fn dangling_sign_is_flushed_as_a_number() {
    assert_eq!(tokenize("--2").unwrap(), vec![number("-"), number("-2")]);
    assert_eq!(tokenize("-(2)").unwrap(),
               vec![number("-"), Token::LeftParen, number("2"), Token::RightParen]);
}

#[test]
fn decimal_point_resets_between_numbers() {
    assert_eq!(tokenize("1.5+2.5").unwrap(),
               vec![number("1.5"), Token::Operator('+'), number("2.5")]);
    assert_eq!(tokenize(".5").unwrap(), vec![number(".5")]);
}

#[test]
fn second_decimal_point_is_rejected() {
    assert_eq!(tokenize("1.2.3"),
               Err(TokenError::MultipleDecimalPoints { numeral: "1.2.".to_string() }));
    assert_eq!(tokenize("4+..1"),
               Err(TokenError::MultipleDecimalPoints { numeral: "..".to_string() }));
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(tokenize("5+a"),
               Err(TokenError::UnexpectedCharacter { character: 'a' }));
    assert_eq!(tokenize("1\t+2"),
               Err(TokenError::UnexpectedCharacter { character: '\t' }));
    assert_eq!(tokenize("1 +2"),
               Err(TokenError::UnexpectedCharacter { character: ' ' }));
}

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(tokenize("").unwrap(), Vec::new());
}

#[test]
fn tokens_display_their_source_text() {
    let text = tokenize("(-1.5+2)*3").unwrap()
                                      .iter()
                                      .map(ToString::to_string)
                                      .collect::<String>();
    assert_eq!(text, "(-1.5+2)*3");
}

#[test]
fn strip_spaces_only_removes_spaces() {
    assert_eq!(strip_spaces(" 1 2 + 3 "), "12+3");
    assert_eq!(strip_spaces("1\n"), "1\n");
}

#[test]
fn operator_precedence() {
    assert_eq!(precedence('+'), precedence('-'));
    assert_eq!(precedence('*'), precedence('/'));
    assert!(precedence('*') > precedence('+'));
    assert_eq!(precedence('%'), 0);
    assert_eq!(BinaryOperator::Mul.precedence(), 2);
}

#[test]
fn apply_operator_checks_symbols_and_divisors() {
    assert_eq!(apply_operator('-', 1.0, 5.0), Ok(-4.0));
    assert_eq!(apply_operator('/', 8.0, -4.0), Ok(-2.0));
    assert!(matches!(apply_operator('/', 1.0, 0.0),
                     Err(reckon::error::EvalError::DivisionByZero)));
    assert!(matches!(apply_operator('^', 2.0, 3.0),
                     Err(reckon::error::EvalError::InvalidOperator { operator: '^' })));
}

#[test]
fn evaluator_rejects_unknown_operators() {
    let tokens = vec![number("2"), Token::Operator('%'), number("3")];
    assert!(matches!(evaluate(&tokens),
                     Err(reckon::error::EvalError::InvalidOperator { operator: '%' })));
}

#[test]
fn evaluator_rejects_bad_numerals() {
    let tokens = vec![number("1..2")];
    assert!(matches!(evaluate(&tokens),
                     Err(reckon::error::EvalError::InvalidToken { ref token, details: None }) if token == "1..2"));
}

#[test]
fn evaluator_rejects_empty_token_sequence() {
    assert!(matches!(evaluate(&[]),
                     Err(reckon::error::EvalError::InvalidExpression { .. })));
}

/// The evaluator module reduces a token sequence to a number.
///
/// The evaluator runs the shunting-yard algorithm over an operand stack and
/// an operator stack, applying operators as precedence and parentheses allow.
/// It is the second and final stage of an evaluation.
///
/// # Responsibilities
/// - Orders operator application by precedence and left-associativity.
/// - Matches parentheses and reports unbalanced ones.
/// - Reports division by zero and malformed operand/operator sequences.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the whitespace-free text and produces numbers, operators
/// and parentheses. This is the first stage of an evaluation.
///
/// # Responsibilities
/// - Groups digits and at most one decimal point into numerals.
/// - Folds a sign into the numeral that follows it.
/// - Reports characters outside the calculator's alphabet.
pub mod lexer;

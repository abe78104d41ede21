/// Core evaluation logic.
///
/// Contains the operand and operator stacks, the reduction step and the
/// [`core::evaluate`] entry point.
pub mod core;

/// Binary operator handling.
///
/// Maps operator symbols to [`operator::BinaryOperator`], ranks them by
/// precedence and applies them to two operands.
pub mod operator;

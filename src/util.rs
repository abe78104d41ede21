/// Numeric formatting helpers.
///
/// This module renders evaluation results for people: the shortest decimal
/// text that round-trips, switching to scientific notation for very large and
/// very small magnitudes.
pub mod num;

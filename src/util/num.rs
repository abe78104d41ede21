/// Smallest decimal exponent still printed in fixed notation.
pub const MIN_FIXED_EXPONENT: i32 = -4;
/// Decimal exponent from which scientific notation is used.
pub const MAX_FIXED_EXPONENT: i32 = 6;

/// Formats a value with the shortest representation that round-trips.
///
/// Values whose decimal exponent lies in
/// `MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT` are printed in fixed notation,
/// everything else as `d.ddde±XX` with at least two exponent digits.
/// Non-finite values print as `NaN`, `+Inf` and `-Inf`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_general;
///
/// assert_eq!(format_general(4.0), "4");
/// assert_eq!(format_general(5.6), "5.6");
/// assert_eq!(format_general(123_456.0), "123456");
/// assert_eq!(format_general(1_234_567.0), "1.234567e+06");
/// assert_eq!(format_general(0.0001), "0.0001");
/// assert_eq!(format_general(0.000_012_5), "1.25e-05");
/// assert_eq!(format_general(f64::NEG_INFINITY), "-Inf");
/// ```
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && !(MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    value.to_string()
}

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Number of significant digits used when printing results.
pub const DEFAULT_PRECISION: usize = 6;

/// Truncates an `f64` toward zero and converts it to `i64`, if the result is
/// exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if `value` is NaN, infinite, or its integer part
/// exceeds `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Parameters
/// - `value`: The number to truncate.
/// - `error`: The error to return if conversion is not possible.
///
/// ## Example
/// ```
/// use deskcalc::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(3.9, "bad").unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, "bad").unwrap(), -3);
/// assert!(f64_to_i64_truncated(f64::NAN, "bad").is_err());
/// assert!(f64_to_i64_truncated(1e300, "bad").is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Formats `value` in general notation with `precision` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation (`1.5e+20`) otherwise. Trailing zeros
/// of the fraction are removed, so whole numbers print without a point.
/// A precision of `0` is treated as `1`.
///
/// ## Example
/// ```
/// use deskcalc::util::num::format_general;
///
/// assert_eq!(format_general(1024.0, 6), "1024");
/// assert_eq!(format_general(2.5, 6), "2.5");
/// assert_eq!(format_general(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_general(123_456_789.0, 6), "1.23457e+08");
/// assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
/// assert_eq!(format_general(-3.0, 6), "-3");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };
    let max_exponent = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

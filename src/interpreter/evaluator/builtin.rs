use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError, RuntimeError},
    interpreter::{
        evaluator::{core::EvalResult, primary::primary, utils::expect_operator},
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
    util::num::f64_to_i64_truncated,
};

/// Evaluates `sqrt primary`, with the `sqrt` keyword already consumed.
///
/// The operand is a primary, so `sqrt 16` and `sqrt(16)` both work while
/// `sqrt 4 + 5` is `(sqrt 4) + 5`.
///
/// # Errors
/// `NegativeRadicand` if the operand is below zero.
pub fn square_root<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let line = tokens.line();
    let radicand = primary(tokens, symbols)?;
    if radicand < 0.0 {
        return Err(RuntimeError::NegativeRadicand { value: radicand,
                                                    line }.into());
    }
    Ok(radicand.sqrt())
}

/// Evaluates `pow(base, exponent)`, with the `pow` keyword already consumed.
///
/// Both arguments are primaries. The exponent is truncated toward zero and
/// used as a multiplication count; see [`integer_power`].
///
/// # Errors
/// - `MissingOpenParen`, `MissingCommaInPow` or `MissingCloseParen` for
///   malformed calls.
/// - Errors of [`integer_power`] and of the arguments.
pub fn power<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let line = tokens.line();
    expect_operator(tokens, '(', ParseError::MissingOpenParen { line })?;
    let base = primary(tokens, symbols)?;
    let comma_line = tokens.line();
    expect_operator(tokens, ',', ParseError::MissingCommaInPow { line: comma_line })?;
    let exponent = primary(tokens, symbols)?;
    let close_line = tokens.line();
    expect_operator(tokens, ')', ParseError::MissingCloseParen { line: close_line })?;

    Ok(integer_power(base, exponent, line)?)
}

/// Raises `base` to `exponent` truncated toward zero, multiplying from an
/// accumulator of `1` by repeated squaring, so the cost grows with the number
/// of bits of the count rather than with the count itself.
///
/// A negative count yields the reciprocal of the positive power. Any count of
/// zero yields `1`, including for a zero base.
///
/// # Errors
/// - `InvalidExponent` if the exponent is not finite or too large to count.
/// - `DivideByZero` if a negative count is applied to a power that is zero.
///
/// # Example
/// ```
/// use deskcalc::interpreter::evaluator::builtin::integer_power;
///
/// assert_eq!(integer_power(2.0, 10.0, 1).unwrap(), 1024.0);
/// assert_eq!(integer_power(2.0, 3.9, 1).unwrap(), 8.0);
/// assert_eq!(integer_power(2.0, -2.0, 1).unwrap(), 0.25);
/// assert_eq!(integer_power(7.0, 0.0, 1).unwrap(), 1.0);
/// assert!(integer_power(0.0, -1.0, 1).is_err());
/// ```
pub fn integer_power(base: f64, exponent: f64, line: usize) -> EvalResult<f64> {
    let count = f64_to_i64_truncated(exponent,
                                     RuntimeError::InvalidExponent { value: exponent,
                                                                     line })?;

    // Square-and-multiply over the magnitude, two products per bit of the count.
    let mut result = 1.0;
    let mut factor = base.abs();
    let mut remaining = count.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor *= factor;
        }
    }
    if base < 0.0 && count % 2 != 0 {
        result = -result;
    }

    if count < 0 {
        if result == 0.0 {
            return Err(RuntimeError::DivideByZero { line });
        }
        return Ok(1.0 / result);
    }
    Ok(result)
}

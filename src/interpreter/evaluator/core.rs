use std::io::BufRead;

use crate::{
    error::{CalcResult, RuntimeError},
    interpreter::{
        evaluator::primary::primary, lexer::Token, symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Result type used by the symbol table and the numeric builtins.
///
/// Functions that only compute return either a value of type `T` or a
/// `RuntimeError` describing the failure. Functions that also read tokens
/// return [`CalcResult`] instead.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression: terms joined by `+` and `-`.
///
/// This is the entry point for evaluating anything below a statement. The
/// operators are left-associative; the running value is accumulated
/// iteratively. The token that ends the expression is pushed back. End of
/// input also ends the expression.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `symbols`: Variables visible to the expression.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     evaluator::core::expression, symbol_table::SymbolTable, token_stream::TokenStream,
/// };
///
/// let mut tokens = TokenStream::new("10 - 4 - 3;".as_bytes());
/// let mut symbols = SymbolTable::new();
/// assert_eq!(expression(&mut tokens, &mut symbols).unwrap(), 3.0);
/// ```
pub fn expression<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = term(tokens, symbols)?;
    loop {
        let Some(token) = tokens.try_get()? else {
            return Ok(left);
        };
        match token {
            Token::Operator('+') => left += term(tokens, symbols)?,
            Token::Operator('-') => left -= term(tokens, symbols)?,
            other => {
                tokens.unget(other);
                return Ok(left);
            },
        }
    }
}

/// Evaluates a term: primaries joined by `*`, `/` and `%`.
///
/// Division and remainder check the right operand before applying it; an
/// exact zero is an error rather than an infinity or NaN. The remainder takes
/// the sign of the dividend.
///
/// Grammar: `term := primary (("*" | "/" | "%") primary)*`
///
/// # Errors
/// `DivideByZero` if the right operand of `/` or `%` is zero, or any error of
/// the operands.
pub fn term<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut left = primary(tokens, symbols)?;
    loop {
        let Some(token) = tokens.try_get()? else {
            return Ok(left);
        };
        match token {
            Token::Operator('*') => left *= primary(tokens, symbols)?,
            Token::Operator('/') => left /= divisor(tokens, symbols)?,
            Token::Operator('%') => left %= divisor(tokens, symbols)?,
            other => {
                tokens.unget(other);
                return Ok(left);
            },
        }
    }
}

fn divisor<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let line = tokens.line();
    let value = primary(tokens, symbols)?;
    if value == 0.0 {
        return Err(RuntimeError::DivideByZero { line }.into());
    }
    Ok(value)
}

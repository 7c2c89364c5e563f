use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError},
    interpreter::{
        evaluator::{
            builtin::{power, square_root},
            core::expression,
            utils::expect_operator,
        },
        lexer::Token,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Evaluates a primary, the tightest-binding level of the grammar.
///
/// Primaries are:
/// - numeric literals,
/// - parenthesized expressions,
/// - `-` primary (negation),
/// - `+` primary (absolute value, so `+-3` is `3`),
/// - `sqrt` primary,
/// - `pow(base, exponent)`,
/// - a variable read, or an assignment `name = expression`.
///
/// The prefix operators recurse into primary rather than term, so `--2` is
/// `2` and `-2 * 3` is `(-2) * 3`.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
///              | ("-" | "+" | "sqrt") primary
///              | "pow" "(" primary "," primary ")"
///              | name "=" expression
///              | name
/// ```
/// # Errors
/// - `PrimaryExpected` if the next token cannot start a primary. The token is
///   pushed back.
/// - `MissingCloseParen` for an unclosed `(`.
/// - Errors of [`square_root`], [`power`] and the symbol table.
pub fn primary<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let token = tokens.get()?;
    let line = tokens.line();

    match token {
        Token::Number(value) => Ok(value),
        Token::Operator('(') => {
            let value = expression(tokens, symbols)?;
            expect_operator(tokens, ')', ParseError::MissingCloseParen { line })?;
            Ok(value)
        },
        Token::Operator('-') => Ok(-primary(tokens, symbols)?),
        Token::Operator('+') => Ok(primary(tokens, symbols)?.abs()),
        Token::SquareRoot => square_root(tokens, symbols),
        Token::Pow => power(tokens, symbols),
        Token::Identifier(name) => variable(tokens, symbols, &name),
        other => {
            let found = other.to_string();
            tokens.unget(other);
            Err(ParseError::PrimaryExpected { found, line }.into())
        },
    }
}

/// Reads `name`, or assigns to it when followed by `=`.
///
/// An assignment evaluates a whole expression on the right and yields the
/// stored value, so `a = b = 3` sets both. Only declared, non-constant
/// variables can be assigned.
fn variable<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable, name: &str) -> CalcResult<f64>
    where R: BufRead
{
    let line = tokens.line();
    match tokens.try_get()? {
        Some(Token::Operator('=')) => {
            let value = expression(tokens, symbols)?;
            symbols.assign(name, value, line)?;
            Ok(value)
        },
        Some(other) => {
            tokens.unget(other);
            Ok(symbols.lookup(name, line)?)
        },
        None => Ok(symbols.lookup(name, line)?),
    }
}

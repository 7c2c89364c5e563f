use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError, RuntimeError},
    interpreter::{
        evaluator::{core::expression, utils::expect_operator},
        lexer::Token,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Evaluates a single statement.
///
/// A statement is either a declaration, introduced by `let`, or a plain
/// expression. Assignments are expressions (`x = 3`), so they need no
/// statement form of their own.
///
/// The token that ends the statement (normally `;`) is left pushed back.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
/// - `symbols`: The session's variables.
///
/// # Returns
/// The value of the expression, or the initial value of the declared
/// variable.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     statement::statement, symbol_table::SymbolTable, token_stream::TokenStream,
/// };
///
/// let mut tokens = TokenStream::new("let x = 5; x + 1;".as_bytes());
/// let mut symbols = SymbolTable::new();
/// assert_eq!(statement(&mut tokens, &mut symbols).unwrap(), 5.0);
/// tokens.ignore(';').unwrap();
/// assert_eq!(statement(&mut tokens, &mut symbols).unwrap(), 6.0);
/// ```
pub fn statement<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    match tokens.get()? {
        Token::Let => declaration(tokens, symbols),
        other => {
            tokens.unget(other);
            expression(tokens, symbols)
        },
    }
}

/// Parses and executes a declaration, with `let` already consumed.
///
/// Syntax:
/// ```text
///     declaration := "let" ["constant"] name "=" expression
/// ```
/// A `constant` declaration marks the variable read-only; later assignments
/// to it fail.
///
/// # Errors
/// - `NameExpected` if no name follows `let` (or `let constant`).
/// - `DuplicateName` if the name is already declared. This is checked before
///   the initializer is evaluated.
/// - `AssignmentExpected` if the name is not followed by `=`.
/// - Any error of the initializer.
pub fn declaration<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> CalcResult<f64>
    where R: BufRead
{
    let mut token = tokens.get()?;
    let constant = token == Token::ConstantKeyword;
    if constant {
        token = tokens.get()?;
    }
    let line = tokens.line();

    let name = match token {
        Token::Identifier(name) => name,
        other => {
            let found = other.to_string();
            tokens.unget(other);
            return Err(ParseError::NameExpected { found, line }.into());
        },
    };

    if symbols.exists(&name) {
        return Err(RuntimeError::DuplicateName { name, line }.into());
    }

    expect_operator(tokens,
                    '=',
                    ParseError::AssignmentExpected { name: name.clone(),
                                                     line })?;

    let value = expression(tokens, symbols)?;
    symbols.declare(&name, value, constant, line)?;
    Ok(value)
}

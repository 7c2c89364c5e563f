use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError},
    interpreter::{lexer::Token, token_stream::TokenStream},
};

/// Consumes the operator `expected` or fails with `error`.
///
/// A mismatching token is pushed back instead of being swallowed, so error
/// recovery still sees a `;` that ended the statement early.
pub(in crate::interpreter) fn expect_operator<R>(tokens: &mut TokenStream<R>,
                                                 expected: char,
                                                 error: ParseError)
                                                 -> CalcResult<()>
    where R: BufRead
{
    match tokens.try_get()? {
        Some(Token::Operator(op)) if op == expected => Ok(()),
        Some(other) => {
            tokens.unget(other);
            Err(error.into())
        },
        None => Err(error.into()),
    }
}

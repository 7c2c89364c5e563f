use std::io::BufRead;

use logos::Logos;

use crate::{
    error::{CalcResult, ParseError},
    interpreter::lexer::Token,
};

/// A stream of tokens read on demand from a character source.
///
/// The source is any [`BufRead`]; it is consumed one line at a time and each
/// line is handed to a Logos lexer starting at the current offset, so an
/// interactive terminal is only read when the grammar asks for another token.
///
/// The stream can hold exactly one pushed-back token. Pushing back a second
/// token before the first has been read again is a parser bug and panics.
pub struct TokenStream<R> {
    source:      R,
    line:        String,
    offset:      usize,
    line_number: usize,
    buffer:      Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream over `source`. Nothing is read until the first
    /// token is requested.
    pub const fn new(source: R) -> Self {
        Self { source,
               line: String::new(),
               offset: 0,
               line_number: 0,
               buffer: None }
    }

    /// The 1-based number of the line currently being tokenized, or `0`
    /// before any input has been read.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line_number
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first without touching the source.
    ///
    /// # Errors
    /// - `BadToken` if the next character starts no token. The character is
    ///   consumed.
    /// - `UnexpectedEndOfInput` if the source is exhausted.
    /// - `Io` if reading the source fails.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut tokens = TokenStream::new("let x = 2.5;".as_bytes());
    /// assert_eq!(tokens.get().unwrap(), Token::Let);
    /// assert_eq!(tokens.get().unwrap(), Token::Identifier("x".to_string()));
    /// assert_eq!(tokens.get().unwrap(), Token::Operator('='));
    /// assert_eq!(tokens.get().unwrap(), Token::Number(2.5));
    /// assert_eq!(tokens.get().unwrap(), Token::Operator(';'));
    /// assert!(tokens.get().is_err());
    /// ```
    pub fn get(&mut self) -> CalcResult<Token> {
        self.try_get()?
            .ok_or_else(|| ParseError::UnexpectedEndOfInput { line: self.line_number }.into())
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// # Errors
    /// Same as [`TokenStream::get`], except that end of input is not an
    /// error.
    pub fn try_get(&mut self) -> CalcResult<Option<Token>> {
        if let Some(token) = self.buffer.take() {
            return Ok(Some(token));
        }
        if !self.fill()? {
            return Ok(None);
        }

        let rest = &self.line[self.offset..];
        let mut lexer = Token::lexer(rest);
        let next = lexer.next();
        let span = lexer.span();

        match next {
            Some(Ok(token)) => {
                self.offset += span.end;
                Ok(Some(token))
            },
            Some(Err(())) => {
                let token = rest[span.clone()].to_string();
                self.offset += span.end;
                Err(ParseError::BadToken { token,
                                           line: self.line_number }.into())
            },
            None => Ok(None),
        }
    }

    /// Pushes `token` back so the next [`TokenStream::get`] returns it.
    ///
    /// # Panics
    /// Panics if a token is already pushed back.
    pub fn unget(&mut self, token: Token) {
        assert!(self.buffer.is_none(),
                "token pushback buffer already holds {:?}, cannot push back {token:?}",
                self.buffer);
        self.buffer = Some(token);
    }

    /// Returns `true` if no token is pushed back and the source holds nothing
    /// but whitespace.
    ///
    /// # Errors
    /// Returns an error if reading the source fails.
    pub fn at_end(&mut self) -> std::io::Result<bool> {
        Ok(self.buffer.is_none() && !self.fill()?)
    }

    /// Discards input up to and including the next `boundary` character.
    ///
    /// If the pushed-back token is the operator `boundary` itself, only that
    /// token is dropped. Otherwise any pushed-back token is dropped and raw
    /// characters are skipped until `boundary` has been consumed or the
    /// source is exhausted.
    ///
    /// # Errors
    /// Returns an error if reading the source fails.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut tokens = TokenStream::new("1 $ 2; 3;".as_bytes());
    /// assert_eq!(tokens.get().unwrap(), Token::Number(1.0));
    /// assert!(tokens.get().is_err());
    /// tokens.ignore(';').unwrap();
    /// assert_eq!(tokens.get().unwrap(), Token::Number(3.0));
    /// ```
    pub fn ignore(&mut self, boundary: char) -> std::io::Result<()> {
        if let Some(Token::Operator(op)) = self.buffer
           && op == boundary
        {
            self.buffer = None;
            return Ok(());
        }
        self.buffer = None;

        loop {
            if let Some(position) = self.line[self.offset..].find(boundary) {
                self.offset += position + boundary.len_utf8();
                return Ok(());
            }
            if !self.read_line()? {
                return Ok(());
            }
        }
    }

    /// Makes sure the unread part of the current line holds a non-whitespace
    /// character, reading further lines as needed. Returns `false` at end of
    /// input.
    fn fill(&mut self) -> std::io::Result<bool> {
        while self.line[self.offset..].trim_start().is_empty() {
            if !self.read_line()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Reads the next line. Bytes that are not valid UTF-8 become
    /// `U+FFFD` and later lex as a bad token.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line.clear();
        self.offset = 0;
        let mut bytes = Vec::new();
        if self.source.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(false);
        }
        self.line.push_str(&String::from_utf8_lossy(&bytes));
        self.line_number += 1;
        Ok(true)
    }
}

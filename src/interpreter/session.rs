use std::io::{BufRead, Write};

use crate::{
    error::CalcResult,
    interpreter::{
        lexer::{PRINT, Token},
        statement::statement,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
    util::num::{DEFAULT_PRECISION, format_general},
};

/// Printed before every statement is read.
pub const PROMPT: &str = "> ";
/// Printed before every result.
pub const RESULT: &str = "= ";

/// Settings of a calculator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Significant digits of printed results.
    pub precision:   usize,
    /// Whether to print [`PROMPT`] before each statement.
    pub show_prompt: bool,
    /// Whether to seed the built-in constants.
    pub builtins:    bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { precision:   DEFAULT_PRECISION,
               show_prompt: true,
               builtins:    true, }
    }
}

/// A calculator session: the symbol table plus the settings that shape its
/// output.
///
/// The symbol table is the only state that survives from one statement to
/// the next.
#[derive(Debug)]
pub struct Calculator {
    symbols: SymbolTable,
    config:  SessionConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Calculator {
    /// Creates a session, seeding the built-in constants if `config` asks for
    /// them.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let symbols = if config.builtins {
            SymbolTable::with_builtins()
        } else {
            SymbolTable::new()
        };
        Self { symbols, config }
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Formats a result with the session's precision.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_general(value, self.config.precision)
    }

    /// Runs the read-evaluate-print loop until `q` or end of input.
    ///
    /// Each cycle prints the prompt, evaluates one statement and prints
    /// `= result` to `out`. Syntax and evaluation errors are written to `err`
    /// as one line, the input is skipped up to the next `;`, and the loop
    /// carries on.
    ///
    /// # Errors
    /// Only I/O failures end the session with an error.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::{
    ///     session::{Calculator, SessionConfig},
    ///     token_stream::TokenStream,
    /// };
    ///
    /// let config = SessionConfig { show_prompt: false,
    ///                              ..SessionConfig::default() };
    /// let mut calculator = Calculator::new(config);
    /// let mut tokens = TokenStream::new("1/0;\n2 + 3 * 4;\nq".as_bytes());
    /// let (mut out, mut err) = (Vec::new(), Vec::new());
    ///
    /// calculator.run_session(&mut tokens, &mut out, &mut err).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "= 14\n");
    /// assert_eq!(String::from_utf8(err).unwrap(), "Error on line 1: Divide by zero.\n");
    /// ```
    pub fn run_session<R, W, E>(&mut self,
                                tokens: &mut TokenStream<R>,
                                out: &mut W,
                                err: &mut E)
                                -> CalcResult<()>
        where R: BufRead,
              W: Write,
              E: Write
    {
        loop {
            if self.config.show_prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            match self.next_statement(tokens) {
                Ok(Some(value)) => writeln!(out, "{RESULT}{}", self.format(value))?,
                Ok(None) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    writeln!(err, "{e}")?;
                    tokens.ignore(PRINT)?;
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Evaluates the next statement, skipping any empty `;` statements
    /// before it.
    ///
    /// # Returns
    /// `Some(value)` for an evaluated statement, `None` on `q` or end of
    /// input.
    ///
    /// # Errors
    /// Any error of the statement. The stream is left where the error
    /// occurred; callers that continue should call
    /// [`TokenStream::ignore`] first.
    pub fn next_statement<R>(&mut self, tokens: &mut TokenStream<R>) -> CalcResult<Option<f64>>
        where R: BufRead
    {
        let token = loop {
            match tokens.try_get()? {
                Some(Token::Operator(PRINT)) => {},
                Some(token) => break token,
                None => return Ok(None),
            }
        };
        if token == Token::Quit {
            return Ok(None);
        }

        tokens.unget(token);
        statement(tokens, &mut self.symbols).map(Some)
    }

    /// Evaluates every statement in `source` and returns their values in
    /// order. Evaluation stops at `q` or at the first error; there is no
    /// recovery.
    ///
    /// # Errors
    /// The first error encountered.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::session::Calculator;
    ///
    /// let mut calculator = Calculator::default();
    /// assert_eq!(calculator.evaluate("let y = 2.5; y; k").unwrap(), vec![2.5, 2.5, 1000.0]);
    /// assert!(calculator.evaluate("let y = 3;").is_err());
    /// ```
    pub fn evaluate(&mut self, source: &str) -> CalcResult<Vec<f64>> {
        let mut tokens = TokenStream::new(source.as_bytes());
        let mut values = Vec::new();
        while let Some(value) = self.next_statement(&mut tokens)? {
            values.push(value);
        }
        Ok(values)
    }
}

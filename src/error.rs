/// Parsing errors.
///
/// Defines all error types that can occur while turning input characters into
/// tokens and matching them against the statement grammar: unclassifiable
/// characters, missing punctuation, malformed declarations and premature end
/// of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value:
/// undefined or duplicate names, writes to constants, division by zero and
/// invalid arguments to `sqrt` and `pow`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by the tokenizer, the evaluator and the session.
pub type CalcResult<T> = Result<T, Error>;

/// Any failure the calculator can report.
///
/// `Parse` and `Runtime` errors are recoverable: the session reports them and
/// resynchronizes at the next `;`. `Io` errors come from the character source
/// or the output channels and end the session.
#[derive(Debug)]
pub enum Error {
    /// A syntax error.
    Parse(ParseError),
    /// An evaluation error.
    Runtime(RuntimeError),
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns `true` if the statement loop can report this error and carry
    /// on with the next statement.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Runtime(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

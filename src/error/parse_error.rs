#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing a
/// statement.
pub enum ParseError {
    /// A character that starts no token was found.
    BadToken {
        /// The offending input text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration did not name the variable it declares.
    NameExpected {
        /// The token found instead of a name.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration was missing its `=`.
    AssignmentExpected {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `pow` was not followed by `(`.
    MissingOpenParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    MissingCloseParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The two operands of `pow` were not separated by `,`.
    MissingCommaInPow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot start a primary was found.
    PrimaryExpected {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::BadToken { line, .. }
            | Self::NameExpected { line, .. }
            | Self::AssignmentExpected { line, .. }
            | Self::MissingOpenParen { line }
            | Self::MissingCloseParen { line }
            | Self::MissingCommaInPow { line }
            | Self::PrimaryExpected { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => write!(f, "Error on line {line}: Bad token '{token}'."),

            Self::NameExpected { found, line } => write!(f,
                                                         "Error on line {line}: Name expected in declaration, found {found}."),

            Self::AssignmentExpected { name, line } => write!(f,
                                                              "Error on line {line}: '=' missing in declaration of '{name}'."),

            Self::MissingOpenParen { line } => {
                write!(f, "Error on line {line}: Expected '(' after 'pow'.")
            },
            Self::MissingCloseParen { line } => write!(f,
                                                       "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::MissingCommaInPow { line } => write!(f,
                                                       "Error on line {line}: Expected ',' between the arguments of 'pow'."),

            Self::PrimaryExpected { found, line } => {
                write!(f, "Error on line {line}: Primary expected, found {found}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

use logos::Logos;

/// The `;` operator: prints the current statement and separates statements.
pub const PRINT: char = ';';

/// Represents a lexical token in the calculator input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Operators share one variant carrying their character; every other variant
/// carries only the payload it needs.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `42` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `( ) + - * / % = , ;`.
    #[regex(r"[()+\-*/%=,;]", parse_operator)]
    Operator(char),
    /// `let`
    #[token("let")]
    Let,
    /// `q`, ends the session.
    #[token("q", priority = 3)]
    Quit,
    /// `sqrt`
    #[token("sqrt")]
    SquareRoot,
    /// `pow`
    #[token("pow")]
    Pow,
    /// `constant`
    #[token("constant")]
    ConstantKeyword,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::Operator(op) => write!(f, "'{op}'"),
            Self::Let => write!(f, "'let'"),
            Self::Quit => write!(f, "'q'"),
            Self::SquareRoot => write!(f, "'sqrt'"),
            Self::Pow => write!(f, "'pow'"),
            Self::ConstantKeyword => write!(f, "'constant'"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_operator(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

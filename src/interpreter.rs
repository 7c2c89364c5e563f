/// The evaluator module computes values directly from the token stream.
///
/// There is no syntax tree: each grammar level (expression, term, primary)
/// is a function that reads tokens, recurses into the next level and returns
/// an `f64`. The symbol table is passed explicitly to every level.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Evaluates `sqrt`, `pow`, variable reads and assignments.
/// - Reports domain errors such as division by zero or negative radicands.
pub mod evaluator;
/// The lexer module defines the tokens of the calculator language.
///
/// Token recognition is derived with Logos: numbers, names, single-character
/// operators and the keywords `let`, `constant`, `sqrt`, `pow` and `q`.
pub mod lexer;
/// The session module runs the read-evaluate-print loop.
///
/// # Responsibilities
/// - Prints prompts and results.
/// - Skips empty statements and stops on `q` or end of input.
/// - Reports recoverable errors and resynchronizes at the next `;`.
pub mod session;
/// The statement module distinguishes declarations from expressions.
pub mod statement;
/// The symbol table module stores variables and constants.
pub mod symbol_table;
/// The token stream module reads tokens on demand from a character source.
///
/// It owns the one-token pushback buffer that gives the evaluator its single
/// token of lookahead, and the `ignore` operation used for error recovery.
pub mod token_stream;

//! # deskcalc
//!
//! deskcalc is an interactive desk calculator written in Rust.
//! It reads statements, evaluates arithmetic expressions with variables and
//! constants, and prints the results, one statement at a time.
//!
//! ```text
//! > let r = 2;
//! = 2
//! > let constant pi = 3.14159;
//! = 3.14159
//! > pi * pow(r, 2);
//! = 12.5664
//! > q
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcResult, interpreter::session::Calculator};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating a statement, plus the crate-level [`error::Error`]
/// that also carries I/O failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser,
///   evaluator).
/// - Attaches line numbers and human-readable messages.
/// - Separates recoverable errors from fatal ones.
pub mod error;
/// Implements the calculator itself.
///
/// This module ties together the token stream, the evaluator, the symbol
/// table and the read-evaluate-print loop.
///
/// # Responsibilities
/// - Turns characters into tokens with one token of lookahead.
/// - Evaluates statements with operator precedence.
/// - Keeps variables between statements and recovers from errors.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
pub mod util;

/// Evaluates every statement of `source` in a fresh session with the
/// built-in constants, and returns the values in order.
///
/// Evaluation stops at `q`. Unlike the interactive session, the first error
/// aborts evaluation.
///
/// # Errors
/// Returns the first syntax or evaluation error.
///
/// # Examples
/// ```
/// use deskcalc::get_results;
///
/// let values = get_results("let x = 5; x + 1; pow(2, 10);").unwrap();
/// assert_eq!(values, vec![5.0, 6.0, 1024.0]);
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_results("y + 1;").is_err());
/// ```
pub fn get_results(source: &str) -> CalcResult<Vec<f64>> {
    Calculator::default().evaluate(source)
}

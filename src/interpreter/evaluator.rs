/// Expression and term evaluation.
///
/// Contains the two binary-operator levels of the grammar and the shared
/// result type.
pub mod core;

/// Primary evaluation.
///
/// Handles literals, parentheses, prefix operators, variable reads and
/// assignments, and dispatches to the builtins.
pub mod primary;

/// Builtin functions.
///
/// Implements `sqrt` and `pow`, including their argument syntax and domain
/// checks.
pub mod builtin;

pub(in crate::interpreter) mod utils;

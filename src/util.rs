/// Numeric conversion and formatting helpers.
///
/// This module provides the checked float-to-integer conversion used for
/// repetition counts, and the general-notation formatter used to print
/// results with a fixed number of significant digits.
pub mod num;

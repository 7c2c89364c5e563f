#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while evaluating a statement.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    UndefinedName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists.
    DuplicateName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable declared with `constant`.
    ConstantAssignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division (or remainder) by zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `sqrt` was applied to a negative number.
    NegativeRadicand {
        /// The negative operand.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The exponent of `pow` is not a usable repetition count.
    InvalidExponent {
        /// The exponent as written.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedName { line, .. }
            | Self::DuplicateName { line, .. }
            | Self::ConstantAssignment { line, .. }
            | Self::DivideByZero { line }
            | Self::NegativeRadicand { line, .. }
            | Self::InvalidExponent { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name, line } => {
                write!(f, "Error on line {line}: Undefined name '{name}'.")
            },
            Self::DuplicateName { name, line } => {
                write!(f, "Error on line {line}: '{name}' declared twice.")
            },
            Self::ConstantAssignment { name, line } => write!(f,
                                                              "Error on line {line}: Cannot assign to constant '{name}'."),

            Self::DivideByZero { line } => write!(f, "Error on line {line}: Divide by zero."),
            Self::NegativeRadicand { value, line } => write!(f,
                                                             "Error on line {line}: Radicand can't be negative, found {value}."),

            Self::InvalidExponent { value, line } => write!(f,
                                                            "Error on line {line}: Invalid exponent {value} for 'pow'."),
        }
    }
}

impl std::error::Error for RuntimeError {}

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Name and value of the variable seeded into every session that asks for
/// built-ins.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("k", 1000.0)];

/// A named value in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The variable name; unique within a table.
    pub name:     String,
    /// The current value.
    pub value:    f64,
    /// `true` if the variable was declared with `constant` and may not be
    /// assigned.
    pub constant: bool,
}

/// Stores every variable of a session in declaration order.
///
/// Lookups are linear scans by name. Names are unique: [`SymbolTable::declare`]
/// refuses a name that is already present, and nothing else adds entries.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding the built-in constants (`k = 1000`).
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::symbol_table::SymbolTable;
    ///
    /// let table = SymbolTable::with_builtins();
    /// assert_eq!(table.lookup("k", 1).unwrap(), 1000.0);
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let variables = BUILTIN_CONSTANTS.iter()
                                         .map(|&(name, value)| Variable { name: name.to_string(),
                                                                          value,
                                                                          constant: true })
                                         .collect();
        Self { variables }
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    /// `UndefinedName` if no such variable exists.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.find(name)
            .map(|variable| variable.value)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                         line })
    }

    /// Overwrites the value of an existing variable.
    ///
    /// # Errors
    /// - `UndefinedName` if no such variable exists; assignment never creates
    ///   variables.
    /// - `ConstantAssignment` if the variable was declared `constant`.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.declare("x", 1.0, false, 1).unwrap();
    /// table.assign("x", 4.0, 1).unwrap();
    /// assert_eq!(table.lookup("x", 1).unwrap(), 4.0);
    /// assert!(table.assign("y", 4.0, 1).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: f64, line: usize) -> EvalResult<()> {
        let variable = self.variables
                           .iter_mut()
                           .find(|variable| variable.name == name)
                           .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                                        line })?;
        if variable.constant {
            return Err(RuntimeError::ConstantAssignment { name: name.to_string(),
                                                          line });
        }
        variable.value = value;
        Ok(())
    }

    /// Adds a new variable at the end of the table.
    ///
    /// # Errors
    /// `DuplicateName` if a variable called `name` already exists.
    pub fn declare(&mut self,
                   name: &str,
                   value: f64,
                   constant: bool,
                   line: usize)
                   -> EvalResult<()> {
        if self.exists(name) {
            return Err(RuntimeError::DuplicateName { name: name.to_string(),
                                                     line });
        }
        self.variables.push(Variable { name: name.to_string(),
                                       value,
                                       constant });
        Ok(())
    }

    /// Returns `true` if a variable called `name` has been declared.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Iterates over all variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    fn find(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }
}

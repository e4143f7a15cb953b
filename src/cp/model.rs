//! CP model definition.

use super::variables::IntVar;
use std::collections::HashMap;

/// A constraint in the CP model.
///
/// The vocabulary covers equality, inequality, disjunction and
/// summation over integer variables. Domain-specific encodings are
/// built from these at the consumer layer.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// `var == value`.
    Fixed {
        /// Constrained variable.
        var: String,
        /// Required value.
        value: i64,
    },

    /// Membership: `var` equals at least one of the candidate variables.
    ///
    /// Equivalent to the disjunction `var == c_1 || var == c_2 || ...`.
    AnyOf {
        /// Constrained variable.
        var: String,
        /// Variables whose values `var` may take.
        candidates: Vec<String>,
    },

    /// Cardinality: exactly `count` of `vars` equal the value of `target`.
    ///
    /// Equivalent to `sum(if v == target { 1 } else { 0 } for v in vars) == count`.
    Count {
        /// Counted variables.
        vars: Vec<String>,
        /// Variable whose value is counted.
        target: String,
        /// Required number of matches.
        count: usize,
    },

    /// `left != right`.
    NotEqual { left: String, right: String },
}

impl Constraint {
    /// Names of every variable this constraint references.
    pub fn vars(&self) -> Vec<&str> {
        match self {
            Constraint::Fixed { var, .. } => vec![var.as_str()],
            Constraint::AnyOf { var, candidates } => std::iter::once(var.as_str())
                .chain(candidates.iter().map(String::as_str))
                .collect(),
            Constraint::Count { vars, target, .. } => vars
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(target.as_str()))
                .collect(),
            Constraint::NotEqual { left, right } => vec![left.as_str(), right.as_str()],
        }
    }
}

/// A constraint programming model.
///
/// Contains integer variables and the conjunction of constraints over them.
///
/// # Examples
///
/// ```
/// use secret_santa::cp::{CpModel, IntVar};
///
/// let mut model = CpModel::new("example");
/// model.add_int_var(IntVar::fixed("slot", 0));
/// model.add_int_var(IntVar::unbounded("x"));
/// model.add_any_of("x", vec!["slot".into()]);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CpModel {
    /// Model name.
    pub name: String,
    /// Integer variables.
    pub int_vars: HashMap<String, IntVar>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
}

impl CpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            int_vars: HashMap::new(),
            constraints: Vec::new(),
        }
    }

    /// Adds an integer variable.
    pub fn add_int_var(&mut self, var: IntVar) {
        self.int_vars.insert(var.name.clone(), var);
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add a fixed-value constraint.
    pub fn add_fixed(&mut self, var: impl Into<String>, value: i64) {
        self.constraints.push(Constraint::Fixed {
            var: var.into(),
            value,
        });
    }

    /// Convenience: add a membership constraint.
    pub fn add_any_of(&mut self, var: impl Into<String>, candidates: Vec<String>) {
        self.constraints.push(Constraint::AnyOf {
            var: var.into(),
            candidates,
        });
    }

    /// Convenience: add a cardinality constraint.
    pub fn add_count(&mut self, vars: Vec<String>, target: impl Into<String>, count: usize) {
        self.constraints.push(Constraint::Count {
            vars,
            target: target.into(),
            count,
        });
    }

    /// Convenience: add an inequality constraint.
    pub fn add_not_equal(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.constraints.push(Constraint::NotEqual {
            left: left.into(),
            right: right.into(),
        });
    }

    /// Validates the model for consistency.
    ///
    /// Checks that all referenced variable names exist.
    pub fn validate(&self) -> Result<(), String> {
        for constraint in &self.constraints {
            for name in constraint.vars() {
                if !self.int_vars.contains_key(name) {
                    return Err(format!("undefined variable: {name}"));
                }
            }
        }
        Ok(())
    }

    /// Returns the number of integer variables.
    pub fn var_count(&self) -> usize {
        self.int_vars.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

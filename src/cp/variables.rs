//! CP variable types.

/// An integer variable with a domain [min, max].
///
/// Represents a decision variable that takes integer values within
/// the specified bounds. Can be fixed to a single value, or left
/// unbounded so that only constraints restrict its values.
#[derive(Debug, Clone)]
pub struct IntVar {
    /// Variable name (unique identifier within a model).
    pub name: String,
    /// Minimum value.
    pub min: i64,
    /// Maximum value.
    pub max: i64,
    /// Fixed value, if any.
    pub fixed: Option<i64>,
}

impl IntVar {
    /// Creates a new integer variable with the given bounds.
    pub fn new(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            fixed: None,
        }
    }

    /// Creates a fixed integer variable.
    pub fn fixed(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            min: value,
            max: value,
            fixed: Some(value),
        }
    }

    /// Creates a variable over the whole `i64` range.
    ///
    /// A solver has to narrow the domain through constraints before it
    /// can enumerate values.
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self::new(name, i64::MIN, i64::MAX)
    }

    /// Whether this variable is fixed to a single value.
    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Whether the bounds are narrower than the full `i64` range.
    pub fn is_bounded(&self) -> bool {
        self.min != i64::MIN || self.max != i64::MAX
    }

    /// Domain size (max - min + 1), saturating for unbounded variables.
    pub fn domain_size(&self) -> u64 {
        if self.max < self.min {
            return 0;
        }
        (self.max.abs_diff(self.min)).saturating_add(1)
    }
}

//! Accumulating configuration validator

use std::fmt;

/// A single failed configuration rule
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Value is out of acceptable range
    OutOfRange {
        /// Dotted field path
        field: String,
        /// Inclusive lower bound, if any
        min: Option<f64>,
        /// Inclusive upper bound, if any
        max: Option<f64>,
        /// Rejected value
        actual: f64,
    },
    /// Value must be a finite number
    NotFinite {
        /// Dotted field path
        field: String,
    },
    /// Value is not one of the accepted choices
    NotOneOf {
        /// Dotted field path
        field: String,
        /// Accepted values
        expected: Vec<&'static str>,
        /// Rejected value
        actual: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                let range_desc = match (min, max) {
                    (Some(min), Some(max)) => format!("between {min} and {max}"),
                    (Some(min), None) => format!("at least {min}"),
                    (None, Some(max)) => format!("at most {max}"),
                    (None, None) => "in valid range".to_string(),
                };
                write!(f, "Field '{field}' must be {range_desc} (got {actual})")
            }
            FieldError::NotFinite { field } => {
                write!(f, "Field '{field}' must be a finite number")
            }
            FieldError::NotOneOf {
                field,
                expected,
                actual,
            } => write!(
                f,
                "Field '{field}' must be one of [{}] (got {actual:?})",
                expected.join(", ")
            ),
        }
    }
}

/// Collects rule failures across a configuration tree
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<FieldError>,
    field_prefix: String,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for a nested section
    pub fn for_field(&self, field_name: &str) -> Self {
        Self {
            errors: Vec::new(),
            field_prefix: self.full_field_name(field_name),
        }
    }

    /// Require a finite value, then check it against optional bounds.
    ///
    /// `exclusive_min` rejects the lower bound itself.
    pub fn finite_range(
        &mut self,
        field_name: &str,
        value: f64,
        min: Option<f64>,
        exclusive_min: bool,
        max: Option<f64>,
    ) -> &mut Self {
        if !value.is_finite() {
            self.errors.push(FieldError::NotFinite {
                field: self.full_field_name(field_name),
            });
            return self;
        }

        let below = match min {
            Some(min) if exclusive_min => value <= min,
            Some(min) => value < min,
            None => false,
        };
        let above = max.is_some_and(|max| value > max);

        if below || above {
            self.errors.push(FieldError::OutOfRange {
                field: self.full_field_name(field_name),
                min,
                max,
                actual: value,
            });
        }
        self
    }

    /// Require `value` to be one of `choices` (case-insensitive).
    pub fn one_of(
        &mut self,
        field_name: &str,
        value: &str,
        choices: &[&'static str],
    ) -> &mut Self {
        let lowered = value.to_lowercase();
        if !choices.iter().any(|choice| *choice == lowered) {
            self.errors.push(FieldError::NotOneOf {
                field: self.full_field_name(field_name),
                expected: choices.to_vec(),
                actual: value.to_string(),
            });
        }
        self
    }

    /// Merge errors from a nested validator
    pub fn merge(&mut self, other: ConfigValidator) {
        self.errors.extend(other.errors);
    }

    /// All accumulated failures
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    fn full_field_name(&self, field_name: &str) -> String {
        if self.field_prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{field_name}", self.field_prefix)
        }
    }
}

//! Validation errors.
//!
//! Both kinds are programmer errors: they are returned synchronously from
//! option validation or from a rejected property assignment and never retried.

use thiserror::Error;

/// A configuration field or property received something it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value has the wrong type (e.g. an integer where a boolean is required).
    #[error("{field} must be {expected}, {found} was given")]
    Type {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// The value has the right type but the wrong shape or range.
    #[error("{field} {reason}, {value} was provided")]
    Value {
        field: String,
        reason: &'static str,
        value: String,
    },
}

impl ConfigError {
    pub fn type_error(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::Type { field: field.into(), expected, found: found.into() }
    }

    pub fn value_error(
        field: impl Into<String>,
        reason: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Value { field: field.into(), reason, value: value.into() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Type { field, .. } | Self::Value { field, .. } => field,
        }
    }

    #[inline]
    pub const fn is_type_error(&self) -> bool { matches!(self, Self::Type { .. }) }

    #[inline]
    pub const fn is_value_error(&self) -> bool { matches!(self, Self::Value { .. }) }
}

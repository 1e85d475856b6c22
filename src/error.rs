//! Lookup error types.

use thiserror::Error;

/// Errors raised when a name or value does not denote a member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("{name} is not a valid member name of {type_name}")]
    NameNotFound {
        type_name: &'static str,
        name: String,
    },

    #[error("{value} is not a valid member value of {type_name}")]
    ValueNotFound {
        type_name: &'static str,
        value: String,
    },
}

impl EnumError {
    /// Returns true for every lookup-not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EnumError::NameNotFound { .. } | EnumError::ValueNotFound { .. }
        )
    }

    /// Name of the enumeration type the lookup ran against.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumError::NameNotFound { type_name, .. } => type_name,
            EnumError::ValueNotFound { type_name, .. } => type_name,
        }
    }
}

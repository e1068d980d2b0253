use serde::Serialize;
use thiserror::Error;

use super::config::DEFAULT_MAX_IDENTIFIER_LENGTH;

/// A rule the proposed field violates. Validation failures are data, never
/// propagated as `Err` from the infrastructure layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("Name already taken.")]
    UniqueName,
    #[error(
        "Name can only contain letters, numbers, spaces, _ or $ and cannot start with a number."
    )]
    NameFormat,
    #[error("Name is required.")]
    RequiredName,
    #[error(
        "Name cannot be more than {} characters when converted to snake_case.",
        DEFAULT_MAX_IDENTIFIER_LENGTH
    )]
    NameLength,
    #[error("Type is required.")]
    RequiredType,
}

impl ValidationError {
    /// Display text using the configured identifier limit.
    pub fn message(&self, max_identifier_length: usize) -> String {
        match self {
            ValidationError::NameLength => format!(
                "Name cannot be more than {max_identifier_length} characters when converted to snake_case."
            ),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the data type catalog is empty")]
    EmptyCatalog,
    #[error("default type '{0}' is not offered by the data type catalog")]
    DefaultTypeNotOffered(crate::domain::DataType),
    #[error("the maximum identifier length must be greater than zero")]
    ZeroIdentifierLength,
}

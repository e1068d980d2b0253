use serde::{Deserialize, Serialize};

use crate::domain::{DataType, DataTypeCatalog};

use super::error::ConfigError;

/// PostgreSQL truncates identifiers longer than this.
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 63;

/// How a proposed name is compared against the names already on the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameComparison {
    #[default]
    Exact,
    /// Names clash when their snake_case forms are equal.
    SnakeCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub data_types: DataTypeCatalog,
    pub default_type: DataType,
    pub max_identifier_length: usize,
    pub name_comparison: NameComparison,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_types: DataTypeCatalog::default(),
            default_type: DataType::default(),
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            name_comparison: NameComparison::default(),
        }
    }
}

impl EditorConfig {
    pub fn with_data_types(mut self, data_types: DataTypeCatalog) -> Self {
        self.data_types = data_types;
        self
    }

    pub fn with_default_type(mut self, default_type: DataType) -> Self {
        self.default_type = default_type;
        self
    }

    pub fn with_max_identifier_length(mut self, max: usize) -> Self {
        self.max_identifier_length = max;
        self
    }

    pub fn with_name_comparison(mut self, comparison: NameComparison) -> Self {
        self.name_comparison = comparison;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_types.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if !self.data_types.contains(self.default_type) {
            return Err(ConfigError::DefaultTypeNotOffered(self.default_type));
        }
        if self.max_identifier_length == 0 {
            return Err(ConfigError::ZeroIdentifierLength);
        }
        Ok(())
    }
}

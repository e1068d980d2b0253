use std::{borrow::Cow, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column types a new field can be declared with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    String,
    Text,
    Integer,
    Number,
    Boolean,
    Date,
    DateTime,
    Time,
    Uuid,
    Json,
}

impl DataType {
    pub const ALL: [DataType; 10] = [
        DataType::String,
        DataType::Text,
        DataType::Integer,
        DataType::Number,
        DataType::Boolean,
        DataType::Date,
        DataType::DateTime,
        DataType::Time,
        DataType::Uuid,
        DataType::Json,
    ];

    /// Identifier used in documents and selector values.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Text => "text",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::DateTime => "datetime",
            DataType::Time => "time",
            DataType::Uuid => "uuid",
            DataType::Json => "json",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            DataType::String => "String",
            DataType::Text => "Text",
            DataType::Integer => "Integer",
            DataType::Number => "Number",
            DataType::Boolean => "Boolean",
            DataType::Date => "Date",
            DataType::DateTime => "Date & Time",
            DataType::Time => "Time",
            DataType::Uuid => "UUID",
            DataType::Json => "JSON",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == normalized)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `(type, label)` pairs offered by the type selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTypeCatalog {
    entries: IndexMap<DataType, Cow<'static, str>>,
}

impl Default for DataTypeCatalog {
    fn default() -> Self {
        DataType::ALL
            .into_iter()
            .map(|data_type| (data_type, Cow::Borrowed(data_type.default_label())))
            .collect()
    }
}

impl FromIterator<(DataType, Cow<'static, str>)> for DataTypeCatalog {
    fn from_iter<I: IntoIterator<Item = (DataType, Cow<'static, str>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl DataTypeCatalog {
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_entry(mut self, data_type: DataType, label: impl Into<Cow<'static, str>>) -> Self {
        self.entries.insert(data_type, label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, data_type: DataType) -> bool {
        self.entries.contains_key(&data_type)
    }

    pub fn label(&self, data_type: DataType) -> Option<&str> {
        self.entries.get(&data_type).map(|label| label.as_ref())
    }

    pub fn position(&self, data_type: DataType) -> Option<usize> {
        self.entries.get_index_of(&data_type)
    }

    pub fn get(&self, index: usize) -> Option<DataType> {
        self.entries.get_index(index).map(|(data_type, _)| *data_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DataType, &str)> {
        self.entries
            .iter()
            .map(|(data_type, label)| (*data_type, label.as_ref()))
    }

    /// Neighbour of `current` in catalog order, wrapping at both ends.
    ///
    /// A type missing from the catalog steps to the first (or last) entry.
    pub fn step(&self, current: Option<DataType>, delta: i32) -> Option<DataType> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        let next = match current.and_then(|data_type| self.position(data_type)) {
            Some(index) => (index as i64 + delta as i64).rem_euclid(len as i64) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.get(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_lists_every_type_in_order() {
        let catalog = DataTypeCatalog::default();
        let types = catalog.iter().map(|(data_type, _)| data_type).collect::<Vec<_>>();
        assert_eq!(types, DataType::ALL.to_vec());
        assert_eq!(catalog.label(DataType::DateTime), Some("Date & Time"));
    }

    #[test]
    fn step_wraps_in_both_directions() {
        let catalog = DataTypeCatalog::empty()
            .with_entry(DataType::String, "String")
            .with_entry(DataType::Number, "Number")
            .with_entry(DataType::Boolean, "Boolean");
        assert_eq!(
            catalog.step(Some(DataType::Boolean), 1),
            Some(DataType::String)
        );
        assert_eq!(
            catalog.step(Some(DataType::String), -1),
            Some(DataType::Boolean)
        );
        assert_eq!(catalog.step(None, 1), Some(DataType::String));
        assert_eq!(catalog.step(Some(DataType::Json), -1), Some(DataType::Boolean));
        assert_eq!(DataTypeCatalog::empty().step(None, 1), None);
    }

    #[test]
    fn parse_accepts_identifier_form() {
        assert_eq!(DataType::parse("number"), Some(DataType::Number));
        assert_eq!(DataType::parse(" DateTime "), Some(DataType::DateTime));
        assert_eq!(DataType::parse(""), None);
    }

    #[test]
    fn catalog_deserializes_from_ordered_map() {
        let catalog: DataTypeCatalog =
            serde_json::from_str(r#"{"uuid": "Identifier", "string": "Short text"}"#)
                .expect("catalog");
        assert_eq!(catalog.get(0), Some(DataType::Uuid));
        assert_eq!(catalog.label(DataType::String), Some("Short text"));
    }
}

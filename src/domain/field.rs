use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DataType;

/// Anything that carries a field name usable for uniqueness checks.
pub trait NamedField {
    fn name(&self) -> &str;
}

/// The in-progress descriptor of the field being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDraft {
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
}

impl FieldDraft {
    pub fn empty(default_type: DataType) -> Self {
        Self {
            name: String::new(),
            data_type: Some(default_type),
            primary_key: false,
            required: false,
            unique: false,
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_type(self, data_type: Option<DataType>) -> Self {
        Self { data_type, ..self }
    }

    pub fn with_primary_key(self, primary_key: bool) -> Self {
        Self {
            primary_key,
            ..self
        }
    }

    pub fn with_required(self, required: bool) -> Self {
        Self { required, ..self }
    }

    pub fn with_unique(self, unique: bool) -> Self {
        Self { unique, ..self }
    }
}

impl Default for FieldDraft {
    fn default() -> Self {
        Self::empty(DataType::default())
    }
}

impl NamedField for FieldDraft {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A field already defined on the model, as supplied by the caller.
///
/// Only `name` is interpreted; every other attribute is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingField {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ExistingField {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }
}

impl NamedField for ExistingField {
    fn name(&self) -> &str {
        &self.name
    }
}

impl From<&FieldDraft> for ExistingField {
    fn from(draft: &FieldDraft) -> Self {
        let attributes = match serde_json::to_value(draft) {
            Ok(Value::Object(mut map)) => {
                map.remove("name");
                map
            }
            _ => Map::new(),
        };
        Self {
            name: draft.name.clone(),
            attributes,
        }
    }
}

impl NamedField for String {
    fn name(&self) -> &str {
        self
    }
}

impl NamedField for str {
    fn name(&self) -> &str {
        self
    }
}

impl<T: NamedField + ?Sized> NamedField for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

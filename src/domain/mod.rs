mod data_type;
mod field;

pub use data_type::{DataType, DataTypeCatalog};
pub use field::{ExistingField, FieldDraft, NamedField};

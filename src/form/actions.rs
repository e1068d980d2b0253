use crate::domain::{DataType, FieldDraft};

use super::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    SetName(String),
    SetType(DataType),
    ClearType,
    TogglePrimaryKey(bool),
    ToggleRequired(bool),
    ToggleUnique(bool),
    /// Submit against the editor's current existing-field snapshot.
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Edited,
    Created(FieldDraft),
    Rejected(Vec<ValidationError>),
    Cancelled,
}

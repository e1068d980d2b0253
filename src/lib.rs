#![deny(rust_2018_idioms)]

mod domain;
mod form;
mod io;

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod presentation;

pub use domain::{DataType, DataTypeCatalog, ExistingField, FieldDraft, NamedField};
pub use form::{
    Callbacks, CommandOutcome, ConfigError, DEFAULT_MAX_IDENTIFIER_LENGTH, EditorCallbacks,
    EditorCommand, EditorConfig, FieldEditor, NameComparison, NoopCallbacks, ValidationError,
    ValidationMode, apply_command, format, snake_case, validate,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, editor_config_from_value, emit,
    existing_fields_from_value, parse_document_str,
};

#[cfg(feature = "tui")]
pub use app::{FieldFormUI, FocusTarget, SessionOutcome, UiOptions};

pub mod prelude {
    pub use super::{EditorConfig, FieldDraft, FieldEditor, ValidationError};
    #[cfg(feature = "tui")]
    pub use super::{FieldFormUI, UiOptions};
}

mod actions;
mod callbacks;
mod config;
mod error;
mod reducers;
mod state;
mod validation;

pub use actions::{CommandOutcome, EditorCommand};
pub use callbacks::{Callbacks, EditorCallbacks, NoopCallbacks};
pub use config::{DEFAULT_MAX_IDENTIFIER_LENGTH, EditorConfig, NameComparison};
pub use error::{ConfigError, ValidationError};
pub use reducers::apply_command;
pub use state::{FieldEditor, ValidationMode};
pub use validation::{format, snake_case, validate};

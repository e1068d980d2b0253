mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{editor_config_from_value, existing_fields_from_value, parse_document_str};
pub use output::{OutputDestination, OutputOptions, emit};

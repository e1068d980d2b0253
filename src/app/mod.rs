mod focus;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod form_ui;
mod runtime;
mod session;
mod status;
mod terminal;
mod text;

pub use focus::FocusTarget;
pub use form_ui::FieldFormUI;
pub use options::UiOptions;
pub use session::SessionOutcome;

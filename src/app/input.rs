use std::sync::Arc;

use crossterm::event::KeyEvent;

use super::keymap::{KeymapContext, KeymapStore};

#[derive(Debug, Clone, Copy)]
pub(crate) enum KeyAction {
    Submit,
    Cancel,
    Quit,
    Toggle,
    FocusStep(i32),
    TypeStep(i32),
    /// Unbound key, forwarded to the focused widget.
    Input(KeyEvent),
}

#[derive(Debug, Clone)]
pub(crate) struct InputRouter {
    store: Arc<KeymapStore>,
}

impl InputRouter {
    pub(crate) fn new(store: Arc<KeymapStore>) -> Self {
        Self { store }
    }

    pub(crate) fn classify(&self, key: &KeyEvent, context: KeymapContext) -> KeyAction {
        self.store
            .classify(key, context)
            .unwrap_or(KeyAction::Input(*key))
    }

    pub(crate) fn help_text(&self, context: KeymapContext) -> Option<String> {
        self.store.help_text(context)
    }
}

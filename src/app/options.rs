use std::{sync::Arc, time::Duration};

use anyhow::Result;

use super::keymap::{self, KeymapStore};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub exit_on_cancel: bool,
    pub show_help: bool,
    pub show_field_list: bool,
    pub(crate) keymap_store: Arc<KeymapStore>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            exit_on_cancel: true,
            show_help: true,
            show_field_list: true,
            keymap_store: keymap::default_store(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Keep the form open after a cancel instead of ending the session.
    pub fn with_exit_on_cancel(mut self, exit: bool) -> Self {
        self.exit_on_cancel = exit;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_field_list(mut self, show: bool) -> Self {
        self.show_field_list = show;
        self
    }

    /// Replace the bundled key bindings with a keymap JSON document.
    pub fn with_keymap_json(mut self, source: &str) -> Result<Self> {
        self.keymap_store = Arc::new(KeymapStore::from_json(source)?);
        Ok(self)
    }
}

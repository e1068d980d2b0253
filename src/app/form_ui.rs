use anyhow::{Context, Result};

use crate::{domain::ExistingField, form::EditorConfig};

use super::{options::UiOptions, runtime::App, session::SessionOutcome};

/// Terminal front end for the new-field form.
#[derive(Debug)]
pub struct FieldFormUI {
    existing: Vec<ExistingField>,
    config: EditorConfig,
    options: UiOptions,
}

impl FieldFormUI {
    pub fn new(existing: Vec<ExistingField>) -> Self {
        Self {
            existing,
            config: EditorConfig::default(),
            options: UiOptions::default(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the form until the user quits, or cancels when `exit_on_cancel` is set.
    pub fn run(self) -> Result<SessionOutcome> {
        let FieldFormUI {
            existing,
            config,
            options,
        } = self;

        config.validate().context("invalid editor configuration")?;
        let mut app = App::new(config, existing, options);
        app.run()
    }
}

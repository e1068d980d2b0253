use tracing::{debug, trace};

use crate::domain::{DataType, FieldDraft, NamedField};

use super::{
    actions::{CommandOutcome, EditorCommand},
    callbacks::{EditorCallbacks, NoopCallbacks},
    config::EditorConfig,
    error::ValidationError,
    reducers::apply_command,
    validation::{format, validate},
};

/// Whether edits re-run validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// No rejected submit yet, or the last re-validation came back clean.
    #[default]
    Deferred,
    /// A submit was rejected; every edit re-validates until the errors clear.
    Live,
}

/// State machine behind the "new field" form.
///
/// Holds the draft being edited and the errors of the last validation. Edits
/// never surface errors before the first rejected submit.
#[derive(Debug)]
pub struct FieldEditor<C = NoopCallbacks> {
    config: EditorConfig,
    draft: FieldDraft,
    errors: Vec<ValidationError>,
    mode: ValidationMode,
    existing: Vec<String>,
    focus_name: bool,
    callbacks: C,
}

impl FieldEditor<NoopCallbacks> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_callbacks(config, NoopCallbacks)
    }
}

impl Default for FieldEditor<NoopCallbacks> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<C: EditorCallbacks> FieldEditor<C> {
    pub fn with_callbacks(config: EditorConfig, callbacks: C) -> Self {
        let draft = FieldDraft::empty(config.default_type);
        Self {
            config,
            draft,
            errors: Vec::new(),
            mode: ValidationMode::Deferred,
            existing: Vec::new(),
            focus_name: true,
            callbacks,
        }
    }

    pub fn with_existing_fields<F: NamedField>(mut self, fields: &[F]) -> Self {
        self.set_existing_fields(fields);
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The submit action is disabled while errors are shown.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn existing_names(&self) -> &[String] {
        &self.existing
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn into_callbacks(self) -> C {
        self.callbacks
    }

    /// Returns whether input focus should move back to the name field, and clears the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_name)
    }

    pub fn set_existing_fields<F: NamedField>(&mut self, fields: &[F]) {
        self.existing = fields.iter().map(|field| field.name().to_string()).collect();
    }

    pub fn set_name(&mut self, raw: impl Into<String>) {
        let name = raw.into();
        self.map_draft(|draft| draft.with_name(name));
    }

    pub fn set_type(&mut self, data_type: DataType) {
        self.map_draft(|draft| draft.with_type(Some(data_type)));
    }

    /// Unsets the type, for selectors that offer a blank choice.
    pub fn clear_type(&mut self) {
        self.map_draft(|draft| draft.with_type(None));
    }

    pub fn toggle_primary_key(&mut self, primary_key: bool) {
        self.map_draft(|draft| draft.with_primary_key(primary_key));
    }

    pub fn toggle_required(&mut self, required: bool) {
        self.map_draft(|draft| draft.with_required(required));
    }

    pub fn toggle_unique(&mut self, unique: bool) {
        self.map_draft(|draft| draft.with_unique(unique));
    }

    /// Validates the formatted draft against `existing`.
    ///
    /// On success the formatted field goes to `on_create` and the editor resets.
    /// On failure the errors are stored, the draft is kept as typed and edits
    /// start re-validating.
    pub fn submit<F: NamedField>(
        &mut self,
        existing: &[F],
    ) -> Result<FieldDraft, Vec<ValidationError>> {
        self.set_existing_fields(existing);
        self.submit_snapshot()
    }

    pub(crate) fn submit_snapshot(&mut self) -> Result<FieldDraft, Vec<ValidationError>> {
        let field = format(&self.draft);
        let errors = validate(&field, &self.existing, &self.config);
        if !errors.is_empty() {
            debug!(name = %field.name, issues = errors.len(), "new field rejected");
            self.errors = errors.clone();
            self.mode = ValidationMode::Live;
            return Err(errors);
        }

        debug!(name = %field.name, data_type = ?field.data_type, "new field accepted");
        self.callbacks.on_create(field.clone());
        self.draft = FieldDraft::empty(self.config.default_type);
        self.errors.clear();
        self.mode = ValidationMode::Deferred;
        self.focus_name = true;
        Ok(field)
    }

    /// Drops the draft. The error list and validation mode stay as they were.
    pub fn cancel(&mut self) {
        debug!(name = %self.draft.name, "new field cancelled");
        self.callbacks.on_cancel();
        self.draft = FieldDraft::empty(self.config.default_type);
    }

    pub fn apply(&mut self, command: EditorCommand) -> CommandOutcome {
        apply_command(self, command)
    }

    fn map_draft(&mut self, transform: impl FnOnce(FieldDraft) -> FieldDraft) {
        let draft = transform(std::mem::take(&mut self.draft));
        if self.mode == ValidationMode::Live {
            let errors = validate(&format(&draft), &self.existing, &self.config);
            trace!(issues = errors.len(), "re-validated draft");
            if errors.is_empty() {
                self.mode = ValidationMode::Deferred;
            }
            self.errors = errors;
        }
        self.draft = draft;
    }
}
